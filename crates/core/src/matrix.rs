//! Visual matrix rules.
//!
//! A matrix item moves through draft, in review, approved, and rejected.
//! There are no transition rules: reviewers may set any status from any other.

use crate::error::CoreError;
use crate::types::DbId;

pub const ITEM_STATUS_DRAFT: &str = "draft";
pub const ITEM_STATUS_IN_REVIEW: &str = "in_review";
pub const ITEM_STATUS_APPROVED: &str = "approved";
pub const ITEM_STATUS_REJECTED: &str = "rejected";

/// All item status names, in lookup-table order.
pub const VALID_ITEM_STATUSES: &[&str] = &[
    ITEM_STATUS_DRAFT,
    ITEM_STATUS_IN_REVIEW,
    ITEM_STATUS_APPROVED,
    ITEM_STATUS_REJECTED,
];

/// Maximum length for a matrix name.
pub const MAX_MATRIX_NAME_LENGTH: usize = 200;

/// Maximum number of assets attached to one matrix item.
pub const MAX_ITEM_ASSETS: usize = 50;

pub fn validate_matrix_name(name: &str) -> Result<(), CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Matrix name is required".to_string()));
    }
    if name.chars().count() > MAX_MATRIX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Matrix name exceeds maximum length of {MAX_MATRIX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_item_status(status: &str) -> Result<(), CoreError> {
    if VALID_ITEM_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_ITEM_STATUSES.join(", ")
        )))
    }
}

/// Drop duplicate asset ids, keeping first-seen order, and enforce the cap.
pub fn normalize_asset_ids(ids: &[DbId]) -> Result<Vec<DbId>, CoreError> {
    let mut out: Vec<DbId> = Vec::with_capacity(ids.len());
    for &id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    if out.len() > MAX_ITEM_ASSETS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_ITEM_ASSETS} assets can be attached to a matrix item (got {})",
            out.len()
        )));
    }
    Ok(out)
}
