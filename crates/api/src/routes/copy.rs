//! Route definitions for the `/copy` resource.

use axum::routing::{delete, put};
use axum::Router;

use crate::handlers::copy;
use crate::state::AppState;

/// Routes mounted at `/copy`.
///
/// ```text
/// DELETE /{id}           -> delete
/// PUT    /{id}/approve   -> approve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", delete(copy::delete))
        .route("/{id}/approve", put(copy::approve))
}
