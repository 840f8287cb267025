//! Render execution model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A row from `executions` joined with its status name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Execution {
    pub id: DbId,
    pub client_id: DbId,
    pub matrix_id: DbId,
    pub status_id: StatusId,
    pub status: String,
    pub output_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for starting an execution.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExecution {
    pub matrix_id: DbId,
}

/// Status report for an execution. `output_url` is kept when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExecutionStatus {
    pub status: String,
    pub output_url: Option<String>,
}
