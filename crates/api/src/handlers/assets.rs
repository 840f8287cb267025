//! Handlers for uploaded assets.
//!
//! Uploads arrive as `multipart/form-data` with a `file` part and the form
//! fields `asset_type`, `tags` (comma-separated) and `is_client_provided`.
//! The bytes go to [`ObjectStorage`](adforge_core::storage::ObjectStorage);
//! the row records where they landed.

use adforge_core::assets::{normalize_tags, parse_tags, storage_key, type_filter, validate_asset_type};
use adforge_core::error::CoreError;
use adforge_core::pagination::{PageRequest, Paginated};
use adforge_core::types::DbId;
use adforge_db::models::asset::{Asset, AssetFilter, CreateAsset, UpdateAssetTags};
use adforge_db::repositories::AssetRepo;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use super::ensure_client_exists;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::AssetListParams;
use crate::state::AppState;

/// File name recorded when the upload part carries none.
const DEFAULT_FILE_NAME: &str = "upload.bin";

/// Content type recorded when the upload part carries none.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The file part of an upload.
struct UploadedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Parse a checkbox-style form value.
fn parse_flag(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" | "" => Ok(false),
        other => Err(AppError::BadRequest(format!(
            "Invalid value '{other}' for 'is_client_provided'"
        ))),
    }
}

async fn ensure_asset_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Asset> {
    AssetRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))
}

/// POST /api/v1/clients/{id}/assets
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let mut file: Option<UploadedFile> = None;
    let mut asset_type: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut is_client_provided = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;
                file = Some(UploadedFile {
                    name: file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "asset_type" => {
                let text = field.text().await?;
                asset_type = Some(text.trim().to_string());
            }
            "tags" => {
                let text = field.text().await?;
                tags = parse_tags(&text)?;
            }
            "is_client_provided" => {
                let text = field.text().await?;
                is_client_provided = parse_flag(&text)?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let asset_type = asset_type
        .ok_or_else(|| AppError::BadRequest("Missing required 'asset_type' field".into()))?;
    validate_asset_type(&asset_type)?;

    if file.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if file.bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the maximum upload size of {} bytes",
            state.config.max_upload_bytes
        )));
    }

    ensure_client_exists(&state.pool, client_id).await?;

    let key = storage_key(client_id, &asset_type, &file.name);
    state.storage.put(&key, &file.bytes).await?;

    let input = CreateAsset {
        client_id,
        name: file.name,
        asset_type,
        url: state.storage.public_url(&key),
        storage_key: key,
        tags,
        metadata: json!({
            "size": file.bytes.len(),
            "content_type": file.content_type,
        }),
        is_client_provided,
    };

    let asset = match AssetRepo::create(&state.pool, &input).await {
        Ok(asset) => asset,
        Err(e) => {
            // Do not leave an orphaned object behind.
            if let Err(cleanup) = state.storage.delete(&input.storage_key).await {
                tracing::warn!(key = %input.storage_key, error = %cleanup, "Failed to remove orphaned upload");
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        asset_id = asset.id,
        client_id,
        user_id = auth.user_id,
        "Asset uploaded"
    );
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/clients/{id}/assets
///
/// Gallery listing: `?type=&search=&page=&per_page=`. `search` matches the
/// file name or any tag, case-insensitively.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    Query(params): Query<AssetListParams>,
) -> AppResult<Json<Paginated<Asset>>> {
    ensure_client_exists(&state.pool, client_id).await?;

    let filter = AssetFilter {
        asset_type: type_filter(params.asset_type.as_deref())?.map(str::to_string),
        search: params.search,
    };
    let page = PageRequest::new(params.page, params.per_page);

    let (assets, total) = AssetRepo::search(&state.pool, client_id, &filter, page).await?;
    Ok(Json(Paginated::new(assets, page, total)))
}

/// GET /api/v1/assets/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Asset>> {
    let asset = ensure_asset_exists(&state.pool, id).await?;
    Ok(Json(asset))
}

/// PUT /api/v1/assets/{id}/tags
///
/// Replace the tag list. Tags are trimmed and deduplicated.
pub async fn update_tags(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssetTags>,
) -> AppResult<Json<Asset>> {
    let tags = normalize_tags(&input.tags)?;
    let asset = AssetRepo::update_tags(&state.pool, id, &tags)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    tracing::info!(asset_id = id, user_id = auth.user_id, "Asset tags updated");
    Ok(Json(asset))
}

/// DELETE /api/v1/assets/{id}
///
/// Removes the stored object and the row. The row is removed even when the
/// storage backend fails; the failure is logged.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let asset = ensure_asset_exists(&state.pool, id).await?;

    if let Err(e) = state.storage.delete(&asset.storage_key).await {
        tracing::warn!(
            asset_id = id,
            key = %asset.storage_key,
            error = %e,
            "Failed to delete stored object; removing row anyway"
        );
    }

    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = id, user_id = auth.user_id, "Asset deleted");
    Ok(StatusCode::NO_CONTENT)
}
