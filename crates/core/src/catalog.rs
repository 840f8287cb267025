//! Fixed catalogs of distribution platforms and creative formats.
//!
//! Matrix items reference these by id. The lists are static; adding a
//! platform is a code change.

use serde::Serialize;

use crate::error::CoreError;

/// An `{ id, name }` pair served to clients for select inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn entry(id: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { id, name }
}

pub const PLATFORMS: &[CatalogEntry] = &[
    entry("facebook", "Facebook"),
    entry("instagram", "Instagram"),
    entry("twitter", "Twitter"),
    entry("linkedin", "LinkedIn"),
    entry("tiktok", "TikTok"),
    entry("youtube", "YouTube"),
    entry("display", "Display Ads"),
    entry("email", "Email"),
];

pub const FORMATS: &[CatalogEntry] = &[
    entry("post", "Post"),
    entry("story", "Story"),
    entry("reel", "Reel"),
    entry("carousel", "Carousel"),
    entry("video", "Video"),
    entry("banner", "Banner"),
    entry("newsletter", "Newsletter"),
];

fn lookup(entries: &[CatalogEntry], id: &str) -> Option<CatalogEntry> {
    entries.iter().copied().find(|e| e.id == id)
}

pub fn validate_platform(id: &str) -> Result<(), CoreError> {
    lookup(PLATFORMS, id).map(|_| ()).ok_or_else(|| {
        CoreError::Validation(format!(
            "Unknown platform '{id}'. Must be one of: {}",
            ids(PLATFORMS)
        ))
    })
}

pub fn validate_format(id: &str) -> Result<(), CoreError> {
    lookup(FORMATS, id).map(|_| ()).ok_or_else(|| {
        CoreError::Validation(format!(
            "Unknown format '{id}'. Must be one of: {}",
            ids(FORMATS)
        ))
    })
}

fn ids(entries: &[CatalogEntry]) -> String {
    entries.iter().map(|e| e.id).collect::<Vec<_>>().join(", ")
}
