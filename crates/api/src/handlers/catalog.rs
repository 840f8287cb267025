//! Read-only catalogs used to populate select inputs.

use adforge_core::assets::VALID_ASSET_TYPES;
use adforge_core::catalog::{CatalogEntry, FORMATS, PLATFORMS};
use adforge_core::generation::{CopyLength, TONES};
use adforge_core::matrix::VALID_ITEM_STATUSES;
use adforge_core::templates::ASPECT_RATIOS;
use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

/// A `{ value, label }` option.
#[derive(Debug, Serialize)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything a client needs to build the matrix and generation forms.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub platforms: &'static [CatalogEntry],
    pub formats: &'static [CatalogEntry],
    pub aspect_ratios: Vec<LabeledOption>,
    pub asset_types: &'static [&'static str],
    pub tones: Vec<&'static str>,
    pub copy_lengths: Vec<&'static str>,
    pub item_statuses: &'static [&'static str],
}

/// GET /api/v1/catalog
pub async fn get_catalog(_auth: AuthUser) -> Json<Catalog> {
    Json(Catalog {
        platforms: PLATFORMS,
        formats: FORMATS,
        aspect_ratios: ASPECT_RATIOS
            .iter()
            .map(|&(value, label)| LabeledOption { value, label })
            .collect(),
        asset_types: VALID_ASSET_TYPES,
        tones: TONES.iter().map(|&(name, _)| name).collect(),
        copy_lengths: CopyLength::ALL.iter().map(|l| l.as_str()).collect(),
        item_statuses: VALID_ITEM_STATUSES,
    })
}
