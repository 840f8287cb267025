//! Handlers for imported templates.

use adforge_core::error::CoreError;
use adforge_core::templates::{
    normalize_dynamic_fields, validate_aspect_ratio, validate_external_template_id,
    validate_template_name,
};
use adforge_core::types::DbId;
use adforge_db::models::template::{CreateTemplate, Template};
use adforge_db::repositories::TemplateRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_client_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a template, returning NotFound if it does not exist.
pub(crate) async fn ensure_template_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Template> {
    TemplateRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))
}

/// POST /api/v1/clients/{id}/templates
///
/// Register a template that lives in the external templating service.
pub async fn import(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<(StatusCode, Json<Template>)> {
    ensure_client_exists(&state.pool, client_id).await?;

    validate_template_name(&input.name)?;
    validate_external_template_id(&input.external_template_id)?;
    if let Some(ratio) = &input.aspect_ratio {
        validate_aspect_ratio(ratio)?;
    }
    let dynamic_fields = normalize_dynamic_fields(&input.dynamic_fields)?;

    let template = TemplateRepo::create(&state.pool, client_id, &input, &dynamic_fields).await?;

    tracing::info!(
        template_id = template.id,
        client_id,
        external_template_id = %template.external_template_id,
        user_id = auth.user_id,
        "Template imported"
    );
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/clients/{id}/templates
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let templates = TemplateRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Template>> {
    let template = ensure_template_exists(&state.pool, id).await?;
    Ok(Json(template))
}

/// DELETE /api/v1/templates/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(template_id = id, user_id = auth.user_id, "Template deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))
    }
}
