//! Repository for the `copy_variations` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::copy_variation::{CopyVariation, CreateCopyVariation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, motivation_id, content, tone, length, variation_number, \
                        is_approved, created_at, updated_at";

const INSERT: &str = "INSERT INTO copy_variations
        (client_id, motivation_id, content, tone, length, variation_number)
     VALUES ($1, $2, $3, $4, $5, $6)";

/// Provides CRUD operations for copy variations.
pub struct CopyVariationRepo;

impl CopyVariationRepo {
    /// Insert one unapproved copy variation.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateCopyVariation,
    ) -> Result<CopyVariation, sqlx::Error> {
        let query = format!("{INSERT} RETURNING {COLUMNS}");
        sqlx::query_as::<_, CopyVariation>(&query)
            .bind(client_id)
            .bind(input.motivation_id)
            .bind(&input.content)
            .bind(&input.tone)
            .bind(&input.length)
            .bind(input.variation_number)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch in one transaction, preserving input order.
    pub async fn create_many(
        pool: &PgPool,
        client_id: DbId,
        inputs: &[CreateCopyVariation],
    ) -> Result<Vec<CopyVariation>, sqlx::Error> {
        let query = format!("{INSERT} RETURNING {COLUMNS}");
        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(inputs.len());
        for input in inputs {
            let row = sqlx::query_as::<_, CopyVariation>(&query)
                .bind(client_id)
                .bind(input.motivation_id)
                .bind(&input.content)
                .bind(&input.tone)
                .bind(&input.length)
                .bind(input.variation_number)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// Find a copy variation by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CopyVariation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM copy_variations WHERE id = $1");
        sqlx::query_as::<_, CopyVariation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's copy variations, optionally for one motivation.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
        motivation_id: Option<DbId>,
    ) -> Result<Vec<CopyVariation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM copy_variations
             WHERE client_id = $1 AND ($2::BIGINT IS NULL OR motivation_id = $2)
             ORDER BY created_at DESC, motivation_id ASC, variation_number ASC"
        );
        sqlx::query_as::<_, CopyVariation>(&query)
            .bind(client_id)
            .bind(motivation_id)
            .fetch_all(pool)
            .await
    }

    /// Set the approval flag. Returns `None` if the variation does not exist.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        approved: bool,
    ) -> Result<Option<CopyVariation>, sqlx::Error> {
        let query = format!(
            "UPDATE copy_variations SET is_approved = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CopyVariation>(&query)
            .bind(id)
            .bind(approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a copy variation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM copy_variations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
