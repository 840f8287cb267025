//! Handlers for visual matrices.

use adforge_core::error::CoreError;
use adforge_core::matrix::validate_matrix_name;
use adforge_core::types::DbId;
use adforge_db::models::matrix::{CreateMatrix, MatrixWithItems, VisualMatrix};
use adforge_db::repositories::{MatrixItemRepo, MatrixRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_client_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a matrix, returning NotFound if it does not exist.
pub(crate) async fn ensure_matrix_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<VisualMatrix> {
    MatrixRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "VisualMatrix",
            id,
        }))
}

/// POST /api/v1/clients/{id}/matrices
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateMatrix>,
) -> AppResult<(StatusCode, Json<VisualMatrix>)> {
    ensure_client_exists(&state.pool, client_id).await?;
    validate_matrix_name(&input.name)?;

    let matrix = MatrixRepo::create(&state.pool, client_id, &input).await?;

    tracing::info!(
        matrix_id = matrix.id,
        client_id,
        user_id = auth.user_id,
        "Visual matrix created"
    );
    Ok((StatusCode::CREATED, Json(matrix)))
}

/// GET /api/v1/clients/{id}/matrices
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VisualMatrix>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let matrices = MatrixRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: matrices }))
}

/// GET /api/v1/matrices/{id}
///
/// The matrix together with all of its items.
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MatrixWithItems>> {
    let matrix = ensure_matrix_exists(&state.pool, id).await?;
    let items = MatrixItemRepo::list_by_matrix(&state.pool, id, None).await?;
    Ok(Json(MatrixWithItems { matrix, items }))
}

/// DELETE /api/v1/matrices/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MatrixRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(matrix_id = id, user_id = auth.user_id, "Visual matrix deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "VisualMatrix",
            id,
        }))
    }
}
