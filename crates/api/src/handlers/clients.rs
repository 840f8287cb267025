//! Handlers for the `/clients` resource.

use adforge_core::clients::{validate_branding_colors, validate_client_name};
use adforge_core::error::CoreError;
use adforge_core::types::DbId;
use adforge_db::models::client::{Client, ClientSummary, CreateClient, UpdateClient};
use adforge_db::repositories::ClientRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_client_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    validate_client_name(&input.name)?;
    validate_branding_colors(&input.branding_colors)?;

    let client = ClientRepo::create(&state.pool, &input).await?;

    tracing::info!(client_id = client.id, user_id = auth.user_id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
///
/// All clients, ordered by name.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ensure_client_exists(&state.pool, id).await?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    if let Some(name) = &input.name {
        validate_client_name(name)?;
    }
    if let Some(colors) = &input.branding_colors {
        validate_branding_colors(colors)?;
    }

    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    tracing::info!(client_id = id, user_id = auth.user_id, "Client updated");
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
///
/// Admin only. Everything scoped to the client is removed with it.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(client_id = id, user_id = admin.user_id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}

/// GET /api/v1/clients/{id}/summary
///
/// Dashboard counts: assets, templates, content, matrices, and matrix items
/// per status.
pub async fn summary(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClientSummary>> {
    ensure_client_exists(&state.pool, id).await?;
    let summary = ClientRepo::summary(&state.pool, id).await?;
    Ok(Json(summary))
}
