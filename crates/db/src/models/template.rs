//! Template entity model and DTOs.

use adforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A template row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Id of the design in the external video-templating service.
    pub external_template_id: String,
    pub aspect_ratio: String,
    pub dynamic_fields: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for importing a template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<String>,
    pub external_template_id: String,
    /// Defaults to `16:9` if omitted.
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub dynamic_fields: Vec<String>,
}
