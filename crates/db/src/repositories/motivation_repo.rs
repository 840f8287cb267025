//! Repository for the `strategic_motivations` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::motivation::StrategicMotivation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, content, is_approved, created_by, created_at, updated_at";

/// Provides CRUD operations for strategic motivations.
pub struct MotivationRepo;

impl MotivationRepo {
    /// Insert one unapproved motivation.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        content: &str,
        created_by: Option<DbId>,
    ) -> Result<StrategicMotivation, sqlx::Error> {
        let query = format!(
            "INSERT INTO strategic_motivations (client_id, content, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StrategicMotivation>(&query)
            .bind(client_id)
            .bind(content)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of unapproved motivations in one transaction,
    /// preserving input order.
    pub async fn create_many(
        pool: &PgPool,
        client_id: DbId,
        contents: &[String],
        created_by: Option<DbId>,
    ) -> Result<Vec<StrategicMotivation>, sqlx::Error> {
        let query = format!(
            "INSERT INTO strategic_motivations (client_id, content, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(contents.len());
        for content in contents {
            let row = sqlx::query_as::<_, StrategicMotivation>(&query)
                .bind(client_id)
                .bind(content)
                .bind(created_by)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// Find a motivation by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StrategicMotivation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM strategic_motivations WHERE id = $1");
        sqlx::query_as::<_, StrategicMotivation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's motivations, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<StrategicMotivation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM strategic_motivations
             WHERE client_id = $1
             ORDER BY created_at DESC, id ASC"
        );
        sqlx::query_as::<_, StrategicMotivation>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Set the approval flag. Returns `None` if the motivation does not exist.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        approved: bool,
    ) -> Result<Option<StrategicMotivation>, sqlx::Error> {
        let query = format!(
            "UPDATE strategic_motivations SET is_approved = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StrategicMotivation>(&query)
            .bind(id)
            .bind(approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a motivation and its copy variations. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM strategic_motivations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
