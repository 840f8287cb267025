//! Handlers for strategic motivations.

use adforge_core::error::CoreError;
use adforge_core::generation::validate_brief;
use adforge_core::types::DbId;
use adforge_db::models::motivation::{CreateMotivation, StrategicMotivation};
use adforge_db::repositories::MotivationRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::{ensure_client_exists, require_content, ApprovalRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /clients/{id}/motivations/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateMotivationsRequest {
    pub brief: String,
}

/// Load a motivation, returning NotFound if it does not exist.
pub(crate) async fn ensure_motivation_exists(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<StrategicMotivation> {
    MotivationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StrategicMotivation",
            id,
        }))
}

/// POST /api/v1/clients/{id}/motivations/generate
///
/// Turn a client brief into strategic motivations. Every generated
/// statement is stored unapproved and returned in generation order.
pub async fn generate(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<GenerateMotivationsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<StrategicMotivation>>>)> {
    ensure_client_exists(&state.pool, client_id).await?;
    validate_brief(&input.brief)?;

    let statements = state
        .generator
        .strategic_motivations(input.brief.trim())
        .await?;
    let motivations =
        MotivationRepo::create_many(&state.pool, client_id, &statements, Some(auth.user_id))
            .await?;

    tracing::info!(
        client_id,
        count = motivations.len(),
        user_id = auth.user_id,
        "Strategic motivations generated"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: motivations })))
}

/// POST /api/v1/clients/{id}/motivations
///
/// Store a hand-written motivation.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateMotivation>,
) -> AppResult<(StatusCode, Json<StrategicMotivation>)> {
    ensure_client_exists(&state.pool, client_id).await?;
    require_content(&input.content, "Motivation")?;

    let motivation = MotivationRepo::create(
        &state.pool,
        client_id,
        input.content.trim(),
        Some(auth.user_id),
    )
    .await?;

    tracing::info!(
        motivation_id = motivation.id,
        client_id,
        user_id = auth.user_id,
        "Strategic motivation created"
    );
    Ok((StatusCode::CREATED, Json(motivation)))
}

/// GET /api/v1/clients/{id}/motivations
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<StrategicMotivation>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let motivations = MotivationRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: motivations }))
}

/// PUT /api/v1/motivations/{id}/approve
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<ApprovalRequest>>,
) -> AppResult<Json<StrategicMotivation>> {
    let is_approved = ApprovalRequest::flag(body);
    let motivation = MotivationRepo::set_approved(&state.pool, id, is_approved)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StrategicMotivation",
            id,
        }))?;

    tracing::info!(
        motivation_id = id,
        is_approved,
        user_id = auth.user_id,
        "Strategic motivation approval set"
    );
    Ok(Json(motivation))
}

/// DELETE /api/v1/motivations/{id}
///
/// Copy variations derived from the motivation are deleted with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MotivationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(motivation_id = id, user_id = auth.user_id, "Strategic motivation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StrategicMotivation",
            id,
        }))
    }
}
