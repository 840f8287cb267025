//! Route definitions for the `/matrices` and `/matrix-items` resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{executions, matrices, matrix_items};
use crate::state::AppState;

/// Routes mounted at `/matrices`.
///
/// ```text
/// GET    /{id}              -> get_by_id (with items)
/// DELETE /{id}              -> delete
/// GET    /{id}/items        -> matrix_items::list (?status=)
/// POST   /{id}/items        -> matrix_items::add
/// POST   /{id}/executions   -> executions::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(matrices::get_by_id).delete(matrices::delete))
        .route(
            "/{id}/items",
            get(matrix_items::list).post(matrix_items::add),
        )
        .route("/{id}/executions", post(executions::create))
}

/// Routes mounted at `/matrix-items`.
///
/// ```text
/// PUT    /{id}          -> update (partial)
/// DELETE /{id}          -> remove
/// PUT    /{id}/status   -> set_status
/// ```
pub fn item_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(matrix_items::update).delete(matrix_items::remove),
        )
        .route("/{id}/status", put(matrix_items::set_status))
}
