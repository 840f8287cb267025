//! Asset entity model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub client_id: DbId,
    /// Original file name as uploaded.
    pub name: String,
    pub asset_type: String,
    pub storage_key: String,
    pub url: String,
    pub tags: Vec<String>,
    /// `{ "size": <bytes>, "content_type": <mime> }`.
    pub metadata: serde_json::Value,
    pub is_client_provided: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload, assembled by the upload handler after the file is stored.
#[derive(Debug, Clone)]
pub struct CreateAsset {
    pub client_id: DbId,
    pub name: String,
    pub asset_type: String,
    pub storage_key: String,
    pub url: String,
    pub tags: Vec<String>,
    pub metadata: serde_json::Value,
    pub is_client_provided: bool,
}

/// Replace an asset's tags.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssetTags {
    pub tags: Vec<String>,
}

/// Gallery filter. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub asset_type: Option<String>,
    /// Case-insensitive substring matched against the name and every tag.
    pub search: Option<String>,
}
