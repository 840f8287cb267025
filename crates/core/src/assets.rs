//! Asset type constants, tag normalization, and storage key layout.
//!
//! Uploaded files land under `{client_id}/{asset_type}/{random}.{ext}` in the
//! object store. Tags arrive either as a comma-separated form field or as a
//! JSON list; both go through [`normalize_tags`].

use rand::distr::{Alphanumeric, SampleString};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Asset types
// ---------------------------------------------------------------------------

pub const ASSET_TYPE_IMAGE: &str = "image";
pub const ASSET_TYPE_VIDEO: &str = "video";
pub const ASSET_TYPE_AUDIO: &str = "audio";
pub const ASSET_TYPE_COPY: &str = "copy";
pub const ASSET_TYPE_VOICEOVER: &str = "voiceover";

/// All valid asset type values.
pub const VALID_ASSET_TYPES: &[&str] = &[
    ASSET_TYPE_IMAGE,
    ASSET_TYPE_VIDEO,
    ASSET_TYPE_AUDIO,
    ASSET_TYPE_COPY,
    ASSET_TYPE_VOICEOVER,
];

/// Gallery filter value meaning "no type filter".
pub const ASSET_TYPE_ALL: &str = "all";

/// Maximum number of tags kept on a single asset.
pub const MAX_TAGS_PER_ASSET: usize = 50;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_LENGTH: usize = 64;

/// Length of the random component of a storage file name.
const RANDOM_NAME_LENGTH: usize = 13;

/// Validate that an asset type is one of the accepted values.
pub fn validate_asset_type(asset_type: &str) -> Result<(), CoreError> {
    if VALID_ASSET_TYPES.contains(&asset_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid asset type '{asset_type}'. Must be one of: {}",
            VALID_ASSET_TYPES.join(", ")
        )))
    }
}

/// Turn a gallery `type` query value into an optional filter.
///
/// `None`, an empty string, and `"all"` all mean "no filter".
pub fn type_filter(value: Option<&str>) -> Result<Option<&str>, CoreError> {
    match value.map(str::trim) {
        None | Some("") | Some(ASSET_TYPE_ALL) => Ok(None),
        Some(t) => {
            validate_asset_type(t)?;
            Ok(Some(t))
        }
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Split a comma-separated tag string into normalized tags.
pub fn parse_tags(raw: &str) -> Result<Vec<String>, CoreError> {
    normalize_tags(raw.split(','))
}

/// Trim tags, drop empties, and remove duplicates while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Result<Vec<String>, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        if tag.chars().count() > MAX_TAG_LENGTH {
            return Err(CoreError::Validation(format!(
                "Tag '{tag}' exceeds maximum length of {MAX_TAG_LENGTH} characters"
            )));
        }
        out.push(tag.to_string());
    }
    if out.len() > MAX_TAGS_PER_ASSET {
        return Err(CoreError::Validation(format!(
            "At most {MAX_TAGS_PER_ASSET} tags are allowed per asset (got {})",
            out.len()
        )));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

/// Lowercased extension of an uploaded file name, or `"bin"` when it has none.
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string())
}

/// Build a fresh storage key for an upload: `{client_id}/{asset_type}/{random}.{ext}`.
pub fn storage_key(client_id: DbId, asset_type: &str, filename: &str) -> String {
    let random = Alphanumeric
        .sample_string(&mut rand::rng(), RANDOM_NAME_LENGTH)
        .to_ascii_lowercase();
    format!(
        "{client_id}/{asset_type}/{random}.{}",
        file_extension(filename)
    )
}
