//! Visual matrix and matrix item models and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A row from `visual_matrices`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisualMatrix {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatrix {
    pub name: String,
    pub description: Option<String>,
}

/// A matrix with its items, for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixWithItems {
    #[serde(flatten)]
    pub matrix: VisualMatrix,
    pub items: Vec<MatrixItem>,
}

/// A row from `visual_matrix_items` joined with its status name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatrixItem {
    pub id: DbId,
    pub matrix_id: DbId,
    pub client_id: DbId,
    pub platform_id: String,
    pub format_id: String,
    pub template_id: DbId,
    pub copy_id: DbId,
    pub asset_ids: Vec<DbId>,
    pub status_id: StatusId,
    /// Resolved from `matrix_item_statuses.name`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an item to a matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatrixItem {
    pub platform_id: String,
    pub format_id: String,
    pub template_id: DbId,
    pub copy_id: DbId,
    #[serde(default)]
    pub asset_ids: Vec<DbId>,
}

/// Partial overwrite of a matrix item. `status` is a status name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMatrixItem {
    pub platform_id: Option<String>,
    pub format_id: Option<String>,
    pub template_id: Option<DbId>,
    pub copy_id: Option<DbId>,
    pub asset_ids: Option<Vec<DbId>>,
    pub status: Option<String>,
}
