//! Shared query parameter types for API handlers.

use adforge_core::types::DbId;
use serde::Deserialize;

/// Asset gallery parameters (`?type=&search=&page=&per_page=`).
///
/// `type=all` or an absent type means no type filter. Page values are
/// clamped by `PageRequest::new`.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Copy variation list filter (`?motivation_id=`).
#[derive(Debug, Deserialize)]
pub struct CopyListParams {
    pub motivation_id: Option<DbId>,
}

/// Matrix item list filter (`?status=`), by status name.
#[derive(Debug, Deserialize)]
pub struct ItemStatusParams {
    pub status: Option<String>,
}
