//! Route definitions for the `/executions` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::executions;
use crate::state::AppState;

/// Routes mounted at `/executions`.
///
/// ```text
/// GET /{id}          -> get_by_id
/// PUT /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(executions::get_by_id))
        .route("/{id}/status", put(executions::update_status))
}
