//! Matrix configuration model and DTOs.

use std::collections::BTreeMap;

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `matrix_configurations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatrixConfiguration {
    pub id: DbId,
    pub client_id: DbId,
    pub template_id: DbId,
    /// Dynamic field name to candidate values.
    pub field_configurations: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatrixConfiguration {
    pub template_id: DbId,
    #[serde(default)]
    pub field_configurations: BTreeMap<String, Vec<String>>,
}
