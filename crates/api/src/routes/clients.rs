//! Route definitions for the `/clients` resource.
//!
//! Also mounts every client-scoped collection under `/clients/{id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    assets, clients, copy, executions, matrices, matrix_configurations, motivations, templates,
};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete (admin)
/// GET    /{id}/summary                    -> summary
///
/// GET    /{id}/assets                     -> assets::list (?type=&search=&page=&per_page=)
/// POST   /{id}/assets                     -> assets::upload (multipart)
/// GET    /{id}/templates                  -> templates::list
/// POST   /{id}/templates                  -> templates::import
/// GET    /{id}/motivations                -> motivations::list
/// POST   /{id}/motivations                -> motivations::create
/// POST   /{id}/motivations/generate       -> motivations::generate
/// GET    /{id}/copy                       -> copy::list (?motivation_id=)
/// POST   /{id}/copy                       -> copy::create
/// GET    /{id}/matrices                   -> matrices::list
/// POST   /{id}/matrices                   -> matrices::create
/// GET    /{id}/matrix-configurations      -> matrix_configurations::list
/// POST   /{id}/matrix-configurations      -> matrix_configurations::create
/// GET    /{id}/executions                 -> executions::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .put(clients::update)
                .delete(clients::delete),
        )
        .route("/{id}/summary", get(clients::summary))
        .route("/{id}/assets", get(assets::list).post(assets::upload))
        .route("/{id}/templates", get(templates::list).post(templates::import))
        .route(
            "/{id}/motivations",
            get(motivations::list).post(motivations::create),
        )
        .route("/{id}/motivations/generate", post(motivations::generate))
        .route("/{id}/copy", get(copy::list).post(copy::create))
        .route("/{id}/matrices", get(matrices::list).post(matrices::create))
        .route(
            "/{id}/matrix-configurations",
            get(matrix_configurations::list).post(matrix_configurations::create),
        )
        .route("/{id}/executions", get(executions::list))
}
