//! Route definitions for the `/motivations` resource.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::{copy, motivations};
use crate::state::AppState;

/// Routes mounted at `/motivations`.
///
/// ```text
/// DELETE /{id}                   -> delete
/// PUT    /{id}/approve           -> approve
/// POST   /{id}/copy/generate     -> copy::generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", delete(motivations::delete))
        .route("/{id}/approve", put(motivations::approve))
        .route("/{id}/copy/generate", post(copy::generate))
}
