//! Handlers for matrix configurations: per-template candidate values for
//! each dynamic field.

use adforge_core::error::CoreError;
use adforge_core::types::DbId;
use adforge_db::models::matrix_configuration::{CreateMatrixConfiguration, MatrixConfiguration};
use adforge_db::repositories::MatrixConfigurationRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ensure_client_exists;
use super::templates::ensure_template_exists;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/clients/{id}/matrix-configurations
///
/// Every key must name one of the template's dynamic fields.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateMatrixConfiguration>,
) -> AppResult<(StatusCode, Json<MatrixConfiguration>)> {
    ensure_client_exists(&state.pool, client_id).await?;

    let template = ensure_template_exists(&state.pool, input.template_id).await?;
    if template.client_id != client_id {
        return Err(CoreError::Validation(format!(
            "Template {} does not belong to client {client_id}",
            template.id
        ))
        .into());
    }

    let unknown: Vec<&str> = input
        .field_configurations
        .keys()
        .filter(|k| !template.dynamic_fields.contains(k))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(CoreError::Validation(format!(
            "Unknown dynamic fields for template {}: {}",
            template.id,
            unknown.join(", ")
        ))
        .into());
    }

    let config = MatrixConfigurationRepo::create(&state.pool, client_id, &input).await?;

    tracing::info!(
        configuration_id = config.id,
        client_id,
        template_id = template.id,
        user_id = auth.user_id,
        "Matrix configuration created"
    );
    Ok((StatusCode::CREATED, Json(config)))
}

/// GET /api/v1/clients/{id}/matrix-configurations
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MatrixConfiguration>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let configs = MatrixConfigurationRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse { data: configs }))
}
