//! Repository for the `clients` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientSummary, CreateClient, ItemStatusCount, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, branding_colors, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, branding_colors)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(input.name.trim())
            .bind(&input.branding_colors)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY LOWER(name) ASC, id ASC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                branding_colors = COALESCE($3, branding_colors)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.branding_colors)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client and, by cascade, everything scoped to it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Dashboard counts for one client.
    ///
    /// The caller must check that the client exists; counts for a missing
    /// client are all zero.
    pub async fn summary(pool: &PgPool, id: DbId) -> Result<ClientSummary, sqlx::Error> {
        let mut summary = sqlx::query_as::<_, ClientSummary>(
            "SELECT
                $1::BIGINT AS client_id,
                (SELECT COUNT(*) FROM assets WHERE client_id = $1) AS asset_count,
                (SELECT COUNT(*) FROM templates WHERE client_id = $1) AS template_count,
                (SELECT COUNT(*) FROM strategic_motivations WHERE client_id = $1)
                    AS motivation_count,
                (SELECT COUNT(*) FROM strategic_motivations
                    WHERE client_id = $1 AND is_approved) AS approved_motivation_count,
                (SELECT COUNT(*) FROM copy_variations WHERE client_id = $1) AS copy_count,
                (SELECT COUNT(*) FROM copy_variations
                    WHERE client_id = $1 AND is_approved) AS approved_copy_count,
                (SELECT COUNT(*) FROM visual_matrices WHERE client_id = $1) AS matrix_count",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        summary.matrix_items_by_status = sqlx::query_as::<_, ItemStatusCount>(
            "SELECT s.name AS status, COUNT(i.id) AS count
             FROM matrix_item_statuses s
             LEFT JOIN visual_matrix_items i ON i.status_id = s.id AND i.client_id = $1
             GROUP BY s.id, s.name
             ORDER BY s.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(summary)
    }
}
