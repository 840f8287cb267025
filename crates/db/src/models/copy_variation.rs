//! Copy variation model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `copy_variations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CopyVariation {
    pub id: DbId,
    pub client_id: DbId,
    pub motivation_id: DbId,
    pub content: String,
    pub tone: String,
    pub length: String,
    pub variation_number: i32,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for one copy variation.
///
/// Older clients send the text as `copy_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCopyVariation {
    pub motivation_id: DbId,
    #[serde(alias = "copy_text")]
    pub content: String,
    pub tone: String,
    pub length: String,
    #[serde(default = "first_variation")]
    pub variation_number: i32,
}

fn first_variation() -> i32 {
    1
}
