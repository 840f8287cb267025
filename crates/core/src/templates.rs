//! Template import validation.
//!
//! Templates reference a design held by the external video-templating
//! service. Only the id, aspect ratio, and the names of the fields that the
//! service lets us fill in are stored here.

use crate::error::CoreError;

/// Aspect ratio used when the import omits one.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// Accepted aspect ratios with their display labels.
pub const ASPECT_RATIOS: &[(&str, &str)] = &[
    ("16:9", "16:9 (Landscape)"),
    ("9:16", "9:16 (Portrait)"),
    ("1:1", "1:1 (Square)"),
    ("4:5", "4:5 (Instagram)"),
    ("2.39:1", "2.39:1 (Cinematic)"),
];

/// Maximum length for a template name.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 200;

/// Maximum number of dynamic fields on one template.
pub const MAX_DYNAMIC_FIELDS: usize = 100;

pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Template name is required".to_string()));
    }
    if name.chars().count() > MAX_TEMPLATE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Template name exceeds maximum length of {MAX_TEMPLATE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_external_template_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation(
            "External template ID is required".to_string(),
        ));
    }
    Ok(())
}

/// Validate an aspect ratio against [`ASPECT_RATIOS`].
pub fn validate_aspect_ratio(ratio: &str) -> Result<(), CoreError> {
    if ASPECT_RATIOS.iter().any(|(r, _)| *r == ratio) {
        Ok(())
    } else {
        let valid: Vec<&str> = ASPECT_RATIOS.iter().map(|(r, _)| *r).collect();
        Err(CoreError::Validation(format!(
            "Invalid aspect ratio '{ratio}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

/// Trim field names, drop blanks and duplicates, keep first-seen order.
pub fn normalize_dynamic_fields(fields: &[String]) -> Result<Vec<String>, CoreError> {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        let field = field.trim();
        if !field.is_empty() && !out.iter().any(|f| f == field) {
            out.push(field.to_string());
        }
    }
    if out.len() > MAX_DYNAMIC_FIELDS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_DYNAMIC_FIELDS} dynamic fields are allowed (got {})",
            out.len()
        )));
    }
    Ok(out)
}
