//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource family.
//! Handlers validate input with `adforge_core`, delegate persistence to the
//! repositories in `adforge_db`, and map errors via [`AppError`].

pub mod assets;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod copy;
pub mod executions;
pub mod matrices;
pub mod matrix_configurations;
pub mod matrix_items;
pub mod motivations;
pub mod templates;

use adforge_core::error::CoreError;
use adforge_core::types::DbId;
use adforge_db::models::client::Client;
use adforge_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};

/// Load a client, returning NotFound if it does not exist.
pub(crate) async fn ensure_client_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
}

/// Request body for the `approve` endpoints. `{}` or no body approves.
#[derive(Debug, serde::Deserialize)]
pub struct ApprovalRequest {
    #[serde(default = "approved_by_default")]
    pub is_approved: bool,
}

impl ApprovalRequest {
    /// Resolve an optional body to the approval flag.
    pub fn flag(body: Option<axum::Json<Self>>) -> bool {
        body.map_or_else(approved_by_default, |axum::Json(req)| req.is_approved)
    }
}

fn approved_by_default() -> bool {
    true
}

/// Reject blank free-text content.
pub(crate) fn require_content(content: &str, what: &str) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{what} must not be empty"
        ))));
    }
    Ok(())
}
