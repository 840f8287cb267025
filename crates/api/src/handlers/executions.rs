//! Handlers for matrix render executions.
//!
//! The external renderer reports progress by overwriting the status; no
//! ordering between statuses is enforced.

use adforge_core::error::CoreError;
use adforge_core::executions::{validate_execution_status, validate_output_url};
use adforge_core::types::DbId;
use adforge_db::models::execution::{Execution, UpdateExecutionStatus};
use adforge_db::models::status::ExecutionStatus;
use adforge_db::repositories::ExecutionRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_client_exists;
use super::matrices::ensure_matrix_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/matrices/{id}/executions
///
/// Record a new `pending` render of the matrix.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(matrix_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Execution>)> {
    let matrix = ensure_matrix_exists(&state.pool, matrix_id).await?;
    let execution = ExecutionRepo::create(&state.pool, matrix.client_id, matrix_id).await?;

    tracing::info!(
        execution_id = execution.id,
        matrix_id,
        user_id = auth.user_id,
        "Execution created"
    );
    Ok((StatusCode::CREATED, Json(execution)))
}

/// GET /api/v1/clients/{id}/executions
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Execution>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let executions = ExecutionRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: executions }))
}

/// GET /api/v1/executions/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Execution>> {
    let execution = ExecutionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Execution",
            id,
        }))?;
    Ok(Json(execution))
}

/// PUT /api/v1/executions/{id}/status
///
/// `output_url` is kept when omitted.
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExecutionStatus>,
) -> AppResult<Json<Execution>> {
    let name = input.status.trim();
    validate_execution_status(name)?;
    let status = ExecutionStatus::from_name(name)
        .ok_or_else(|| AppError::InternalError(format!("Status '{name}' has no lookup row")))?;

    let output_url = input.output_url.as_deref().map(str::trim);
    if let Some(url) = output_url {
        validate_output_url(url)?;
    }

    let execution = ExecutionRepo::update_status(&state.pool, id, status, output_url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Execution",
            id,
        }))?;

    tracing::info!(
        execution_id = id,
        status = status.name(),
        user_id = auth.user_id,
        "Execution status updated"
    );
    Ok(Json(execution))
}
