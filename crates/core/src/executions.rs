//! Render execution status names.
//!
//! An execution records one attempt to render a matrix through the external
//! templating service. Status is overwritten directly by whoever reports
//! progress; no ordering is enforced.

use crate::error::CoreError;

pub const EXECUTION_PENDING: &str = "pending";
pub const EXECUTION_PROCESSING: &str = "processing";
pub const EXECUTION_COMPLETED: &str = "completed";
pub const EXECUTION_FAILED: &str = "failed";

/// All execution status names, in lookup-table order.
pub const VALID_EXECUTION_STATUSES: &[&str] = &[
    EXECUTION_PENDING,
    EXECUTION_PROCESSING,
    EXECUTION_COMPLETED,
    EXECUTION_FAILED,
];

pub fn validate_execution_status(status: &str) -> Result<(), CoreError> {
    if VALID_EXECUTION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid execution status '{status}'. Must be one of: {}",
            VALID_EXECUTION_STATUSES.join(", ")
        )))
    }
}

/// Validate an optional output URL reported by the renderer.
pub fn validate_output_url(url: &str) -> Result<(), CoreError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Output URL '{url}' must be an http(s) URL"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert!(validate_execution_status("processing").is_ok());
        assert!(validate_execution_status("queued").is_err());
    }

    #[test]
    fn output_urls() {
        assert!(validate_output_url("https://cdn.example.com/render.mp4").is_ok());
        assert!(validate_output_url("ftp://host/file").is_err());
        assert!(validate_output_url("").is_err());
    }
}
