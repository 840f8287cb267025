//! Repository for the `visual_matrices` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::matrix::{CreateMatrix, VisualMatrix};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, name, description, created_at, updated_at";

/// Provides CRUD operations for visual matrices.
pub struct MatrixRepo;

impl MatrixRepo {
    /// Insert a new matrix, returning the created row.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateMatrix,
    ) -> Result<VisualMatrix, sqlx::Error> {
        let query = format!(
            "INSERT INTO visual_matrices (client_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisualMatrix>(&query)
            .bind(client_id)
            .bind(input.name.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a matrix by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VisualMatrix>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visual_matrices WHERE id = $1");
        sqlx::query_as::<_, VisualMatrix>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's matrices, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<VisualMatrix>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visual_matrices
             WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, VisualMatrix>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a matrix with its items and executions. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM visual_matrices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
