//! Route definitions for the `/assets` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete
/// PUT    /{id}/tags   -> update_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(assets::get_by_id).delete(assets::delete))
        .route("/{id}/tags", put(assets::update_tags))
}
