//! Repository for the `templates` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{CreateTemplate, Template};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, name, description, external_template_id, aspect_ratio, \
                        dynamic_fields, created_at, updated_at";

/// Provides CRUD operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    ///
    /// `dynamic_fields` must already be normalized. A missing aspect ratio
    /// falls back to the column default.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateTemplate,
        dynamic_fields: &[String],
    ) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates
                (client_id, name, description, external_template_id, aspect_ratio, dynamic_fields)
             VALUES ($1, $2, $3, $4, COALESCE($5, '16:9'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(client_id)
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(input.external_template_id.trim())
            .bind(&input.aspect_ratio)
            .bind(dynamic_fields)
            .fetch_one(pool)
            .await
    }

    /// Find a template by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's templates, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates WHERE client_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a template. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
