//! Handlers for ad copy variations.

use adforge_core::error::CoreError;
use adforge_core::generation::{
    validate_tone, CopyLength, CopyRequest, DEFAULT_COPY_COUNT, DEFAULT_TONE,
};
use adforge_core::types::DbId;
use adforge_db::models::copy_variation::{CopyVariation, CreateCopyVariation};
use adforge_db::repositories::CopyVariationRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::motivations::ensure_motivation_exists;
use super::{ensure_client_exists, require_content, ApprovalRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::CopyListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /motivations/{id}/copy/generate`.
///
/// Absent fields take the defaults: `Professional`, `medium`, 3 variations,
/// no call to action.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateCopyRequest {
    pub tone: Option<String>,
    pub length: Option<String>,
    pub count: Option<u32>,
    #[serde(default)]
    pub include_cta: bool,
}

/// POST /api/v1/motivations/{id}/copy/generate
///
/// Derive `count` copy variations from a motivation, numbered from 1.
pub async fn generate(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(motivation_id): Path<DbId>,
    Json(input): Json<GenerateCopyRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<CopyVariation>>>)> {
    let motivation = ensure_motivation_exists(&state.pool, motivation_id).await?;

    let tone = input
        .tone
        .as_deref()
        .map(str::trim)
        .unwrap_or(DEFAULT_TONE)
        .to_string();
    let length = match input.length.as_deref() {
        Some(raw) => raw.trim().parse::<CopyLength>()?,
        None => CopyLength::Medium,
    };
    let request = CopyRequest {
        motivation: motivation.content.clone(),
        tone,
        length,
        count: input.count.unwrap_or(DEFAULT_COPY_COUNT),
        include_cta: input.include_cta,
    };

    let bodies = state.generator.copy_variations(&request).await?;
    let rows: Vec<CreateCopyVariation> = bodies
        .into_iter()
        .zip(1..)
        .map(|(content, variation_number)| CreateCopyVariation {
            motivation_id,
            content,
            tone: request.tone.clone(),
            length: request.length.as_str().to_string(),
            variation_number,
        })
        .collect();

    let variations =
        CopyVariationRepo::create_many(&state.pool, motivation.client_id, &rows).await?;

    tracing::info!(
        motivation_id,
        client_id = motivation.client_id,
        count = variations.len(),
        user_id = auth.user_id,
        "Copy variations generated"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: variations })))
}

/// POST /api/v1/clients/{id}/copy
///
/// Store hand-written copy against one of the client's motivations.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateCopyVariation>,
) -> AppResult<(StatusCode, Json<CopyVariation>)> {
    ensure_client_exists(&state.pool, client_id).await?;

    let motivation = ensure_motivation_exists(&state.pool, input.motivation_id).await?;
    if motivation.client_id != client_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Motivation {} does not belong to client {client_id}",
            motivation.id
        ))));
    }
    require_content(&input.content, "Copy")?;
    validate_tone(&input.tone)?;
    let length = input.length.trim().parse::<CopyLength>()?;
    if input.variation_number < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Variation number must be at least 1".into(),
        )));
    }

    let input = CreateCopyVariation {
        content: input.content.trim().to_string(),
        tone: input.tone.trim().to_string(),
        length: length.as_str().to_string(),
        ..input
    };
    let variation = CopyVariationRepo::create(&state.pool, client_id, &input).await?;

    tracing::info!(
        copy_id = variation.id,
        client_id,
        user_id = auth.user_id,
        "Copy variation created"
    );
    Ok((StatusCode::CREATED, Json(variation)))
}

/// GET /api/v1/clients/{id}/copy
///
/// Optional `?motivation_id=` narrows the list to one motivation.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Query(params): Query<CopyListParams>,
) -> AppResult<Json<DataResponse<Vec<CopyVariation>>>> {
    ensure_client_exists(&state.pool, client_id).await?;
    let variations =
        CopyVariationRepo::list_by_client(&state.pool, client_id, params.motivation_id).await?;
    Ok(Json(DataResponse { data: variations }))
}

/// PUT /api/v1/copy/{id}/approve
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<ApprovalRequest>>,
) -> AppResult<Json<CopyVariation>> {
    let is_approved = ApprovalRequest::flag(body);
    let variation = CopyVariationRepo::set_approved(&state.pool, id, is_approved)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CopyVariation",
            id,
        }))?;

    tracing::info!(
        copy_id = id,
        is_approved,
        user_id = auth.user_id,
        "Copy variation approval set"
    );
    Ok(Json(variation))
}

/// DELETE /api/v1/copy/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CopyVariationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(copy_id = id, user_id = auth.user_id, "Copy variation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CopyVariation",
            id,
        }))
    }
}
