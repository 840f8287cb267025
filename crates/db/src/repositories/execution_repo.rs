//! Repository for the `executions` table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::execution::Execution;
use crate::models::status::ExecutionStatus;

/// Column list (aliased `e` for executions, `s` for statuses).
const COLUMNS: &str = "e.id, e.client_id, e.matrix_id, e.status_id, s.name AS status, \
                        e.output_url, e.created_at, e.updated_at";

const JOIN: &str = "JOIN execution_statuses s ON s.id = e.status_id";

/// Provides create, list, and status updates for executions.
pub struct ExecutionRepo;

impl ExecutionRepo {
    /// Insert a `pending` execution for a matrix.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        matrix_id: DbId,
    ) -> Result<Execution, sqlx::Error> {
        let query = format!(
            "WITH e AS (
                INSERT INTO executions (client_id, matrix_id, status_id)
                VALUES ($1, $2, $3)
                RETURNING *
             )
             SELECT {COLUMNS} FROM e {JOIN}"
        );
        sqlx::query_as::<_, Execution>(&query)
            .bind(client_id)
            .bind(matrix_id)
            .bind(ExecutionStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find an execution by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Execution>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM executions e {JOIN} WHERE e.id = $1");
        sqlx::query_as::<_, Execution>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's executions, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Execution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM executions e {JOIN}
             WHERE e.client_id = $1
             ORDER BY e.created_at DESC, e.id DESC"
        );
        sqlx::query_as::<_, Execution>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the status, keeping `output_url` when `None` is passed.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ExecutionStatus,
        output_url: Option<&str>,
    ) -> Result<Option<Execution>, sqlx::Error> {
        let query = format!(
            "WITH e AS (
                UPDATE executions SET
                    status_id = $2,
                    output_url = COALESCE($3, output_url)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM e {JOIN}"
        );
        sqlx::query_as::<_, Execution>(&query)
            .bind(id)
            .bind(status.id())
            .bind(output_url)
            .fetch_optional(pool)
            .await
    }
}
