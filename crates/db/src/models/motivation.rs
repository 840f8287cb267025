//! Strategic motivation model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `strategic_motivations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StrategicMotivation {
    pub id: DbId,
    pub client_id: DbId,
    pub content: String,
    pub is_approved: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a hand-written motivation.
///
/// Older clients send the text as `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMotivation {
    #[serde(alias = "title")]
    pub content: String,
}
