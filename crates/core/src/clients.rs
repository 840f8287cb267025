//! Client (brand) validation rules.

use crate::error::CoreError;

/// Maximum length for a client name in characters.
pub const MAX_CLIENT_NAME_LENGTH: usize = 200;

/// Maximum number of branding colors stored per client.
pub const MAX_BRANDING_COLORS: usize = 10;

/// Validate a client name: non-empty after trimming and within length limit.
pub fn validate_client_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Client name is required".to_string()));
    }
    if trimmed.chars().count() > MAX_CLIENT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Client name exceeds maximum length of {MAX_CLIENT_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that a color is in hex format `#RRGGBB`.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    if color.len() != 7 {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB hex format"
        )));
    }

    if !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must start with '#'"
        )));
    }

    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}

/// Validate a full branding palette.
pub fn validate_branding_colors(colors: &[String]) -> Result<(), CoreError> {
    if colors.len() > MAX_BRANDING_COLORS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_BRANDING_COLORS} branding colors are allowed (got {})",
            colors.len()
        )));
    }
    colors.iter().try_for_each(|c| validate_hex_color(c))
}
