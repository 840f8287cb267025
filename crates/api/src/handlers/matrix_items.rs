//! Handlers for the items of a visual matrix.
//!
//! An item pairs a platform/format slot with a template, a copy variation,
//! and optional assets. Template, copy, and assets must all belong to the
//! matrix's client. Status is a plain overwrite: any status may follow any
//! other.

use adforge_core::catalog::{validate_format, validate_platform};
use adforge_core::error::CoreError;
use adforge_core::matrix::{normalize_asset_ids, validate_item_status};
use adforge_core::types::DbId;
use adforge_db::models::matrix::{CreateMatrixItem, MatrixItem, UpdateMatrixItem};
use adforge_db::models::status::MatrixItemStatus;
use adforge_db::repositories::matrix_item_repo::MatrixItemChanges;
use adforge_db::repositories::{AssetRepo, CopyVariationRepo, MatrixItemRepo, TemplateRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::matrices::ensure_matrix_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ItemStatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /matrix-items/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Resolve a status name to its lookup value.
fn parse_status(name: &str) -> AppResult<MatrixItemStatus> {
    validate_item_status(name)?;
    MatrixItemStatus::from_name(name)
        .ok_or_else(|| AppError::InternalError(format!("Status '{name}' has no lookup row")))
}

async fn ensure_item_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<MatrixItem> {
    MatrixItemRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MatrixItem",
            id,
        }))
}

fn not_owned(entity: &str, id: DbId, client_id: DbId) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "{entity} {id} does not belong to client {client_id}"
    )))
}

async fn check_template(pool: &sqlx::PgPool, template_id: DbId, client_id: DbId) -> AppResult<()> {
    let template = TemplateRepo::find_by_id(pool, template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;
    if template.client_id != client_id {
        return Err(not_owned("Template", template_id, client_id));
    }
    Ok(())
}

async fn check_copy(pool: &sqlx::PgPool, copy_id: DbId, client_id: DbId) -> AppResult<()> {
    let copy = CopyVariationRepo::find_by_id(pool, copy_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CopyVariation",
            id: copy_id,
        }))?;
    if copy.client_id != client_id {
        return Err(not_owned("CopyVariation", copy_id, client_id));
    }
    Ok(())
}

/// Deduplicate asset ids and make sure every one belongs to the client.
async fn check_assets(
    pool: &sqlx::PgPool,
    asset_ids: &[DbId],
    client_id: DbId,
) -> AppResult<Vec<DbId>> {
    let ids = normalize_asset_ids(asset_ids)?;
    if ids.is_empty() {
        return Ok(ids);
    }
    let owned = AssetRepo::count_owned(pool, client_id, &ids).await?;
    if owned != ids.len() as i64 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "All assets must exist and belong to client {client_id}"
        ))));
    }
    Ok(ids)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/matrices/{id}/items
///
/// New items start as `draft`.
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(matrix_id): Path<DbId>,
    Json(input): Json<CreateMatrixItem>,
) -> AppResult<(StatusCode, Json<MatrixItem>)> {
    let matrix = ensure_matrix_exists(&state.pool, matrix_id).await?;

    validate_platform(&input.platform_id)?;
    validate_format(&input.format_id)?;
    check_template(&state.pool, input.template_id, matrix.client_id).await?;
    check_copy(&state.pool, input.copy_id, matrix.client_id).await?;
    let asset_ids = check_assets(&state.pool, &input.asset_ids, matrix.client_id).await?;

    let item =
        MatrixItemRepo::create(&state.pool, matrix_id, matrix.client_id, &input, &asset_ids)
            .await?;

    tracing::info!(
        item_id = item.id,
        matrix_id,
        platform = %item.platform_id,
        format = %item.format_id,
        user_id = auth.user_id,
        "Matrix item added"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/matrices/{id}/items
///
/// Optional `?status=` narrows the list to one status.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(matrix_id): Path<DbId>,
    Query(params): Query<ItemStatusParams>,
) -> AppResult<Json<DataResponse<Vec<MatrixItem>>>> {
    ensure_matrix_exists(&state.pool, matrix_id).await?;

    let status_id = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(name) => Some(parse_status(name)?.id()),
    };
    let items = MatrixItemRepo::list_by_matrix(&state.pool, matrix_id, status_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/matrix-items/{id}
///
/// Partial overwrite. Absent fields keep their current value.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMatrixItem>,
) -> AppResult<Json<MatrixItem>> {
    let item = ensure_item_exists(&state.pool, id).await?;

    if let Some(platform) = &input.platform_id {
        validate_platform(platform)?;
    }
    if let Some(format) = &input.format_id {
        validate_format(format)?;
    }
    if let Some(template_id) = input.template_id {
        check_template(&state.pool, template_id, item.client_id).await?;
    }
    if let Some(copy_id) = input.copy_id {
        check_copy(&state.pool, copy_id, item.client_id).await?;
    }
    let asset_ids = match &input.asset_ids {
        Some(ids) => Some(check_assets(&state.pool, ids, item.client_id).await?),
        None => None,
    };
    let status = input.status.as_deref().map(parse_status).transpose()?;

    let changes = MatrixItemChanges {
        platform_id: input.platform_id.as_deref(),
        format_id: input.format_id.as_deref(),
        template_id: input.template_id,
        copy_id: input.copy_id,
        asset_ids: asset_ids.as_deref(),
        status_id: status.map(MatrixItemStatus::id),
    };
    let updated = MatrixItemRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MatrixItem",
            id,
        }))?;

    tracing::info!(item_id = id, user_id = auth.user_id, "Matrix item updated");
    Ok(Json(updated))
}

/// PUT /api/v1/matrix-items/{id}/status
pub async fn set_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<MatrixItem>> {
    let status = parse_status(input.status.trim())?;
    let item = MatrixItemRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MatrixItem",
            id,
        }))?;

    tracing::info!(
        item_id = id,
        status = status.name(),
        user_id = auth.user_id,
        "Matrix item status set"
    );
    Ok(Json(item))
}

/// DELETE /api/v1/matrix-items/{id}
pub async fn remove(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MatrixItemRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(item_id = id, user_id = auth.user_id, "Matrix item removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MatrixItem",
            id,
        }))
    }
}
