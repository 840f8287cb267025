//! Client (brand) entity model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub branding_colors: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    #[serde(default)]
    pub branding_colors: Vec<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub branding_colors: Option<Vec<String>>,
}

/// Per-status matrix item count for the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemStatusCount {
    pub status: String,
    pub count: i64,
}

/// Dashboard card for one client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientSummary {
    pub client_id: DbId,
    pub asset_count: i64,
    pub template_count: i64,
    pub motivation_count: i64,
    pub approved_motivation_count: i64,
    pub copy_count: i64,
    pub approved_copy_count: i64,
    pub matrix_count: i64,
    #[sqlx(skip)]
    pub matrix_items_by_status: Vec<ItemStatusCount>,
}
