pub mod assets;
pub mod auth;
pub mod clients;
pub mod copy;
pub mod executions;
pub mod health;
pub mod matrices;
pub mod motivations;
pub mod templates;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout
/// /auth/me                                         current user
/// /auth/password                                   change password (PUT)
/// /auth/password-reset                             request reset (public)
/// /auth/password-reset/confirm                     confirm reset (public)
///
/// /catalog                                         platforms, formats, ratios, tones, ...
///
/// /clients                                         list, create
/// /clients/{id}                                    get, update, delete (admin)
/// /clients/{id}/summary                            dashboard counts
/// /clients/{id}/assets                             gallery, upload
/// /clients/{id}/templates                          list, import
/// /clients/{id}/motivations                        list, create
/// /clients/{id}/motivations/generate               generate from brief (POST)
/// /clients/{id}/copy                               list, create
/// /clients/{id}/matrices                           list, create
/// /clients/{id}/matrix-configurations              list, create
/// /clients/{id}/executions                         list
///
/// /assets/{id}                                     get, delete
/// /assets/{id}/tags                                replace tags (PUT)
///
/// /templates/{id}                                  get, delete
///
/// /motivations/{id}                                delete
/// /motivations/{id}/approve                        set approval (PUT)
/// /motivations/{id}/copy/generate                  generate copy (POST)
///
/// /copy/{id}                                       delete
/// /copy/{id}/approve                               set approval (PUT)
///
/// /matrices/{id}                                   get (with items), delete
/// /matrices/{id}/items                             list (?status=), add
/// /matrices/{id}/executions                        start execution (POST)
///
/// /matrix-items/{id}                               update, remove
/// /matrix-items/{id}/status                        set status (PUT)
///
/// /executions/{id}                                 get
/// /executions/{id}/status                          update status (PUT)
/// ```
///
/// Everything except the public `/auth` routes requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/catalog", get(handlers::catalog::get_catalog))
        .nest("/clients", clients::router())
        .nest("/assets", assets::router())
        .nest("/templates", templates::router())
        .nest("/motivations", motivations::router())
        .nest("/copy", copy::router())
        .nest("/matrices", matrices::router())
        .nest("/matrix-items", matrices::item_router())
        .nest("/executions", executions::router())
}
