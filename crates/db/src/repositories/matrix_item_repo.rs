//! Repository for the `visual_matrix_items` table.
//!
//! Every query resolves the status name by joining `matrix_item_statuses`;
//! writes go through a CTE so `RETURNING` rows carry the name too.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::matrix::{CreateMatrixItem, MatrixItem};
use crate::models::status::{MatrixItemStatus, StatusId};

/// Column list (aliased `i` for items, `s` for statuses).
const COLUMNS: &str = "i.id, i.matrix_id, i.client_id, i.platform_id, i.format_id, \
                        i.template_id, i.copy_id, i.asset_ids, i.status_id, s.name AS status, \
                        i.created_at, i.updated_at";

const JOIN: &str = "JOIN matrix_item_statuses s ON s.id = i.status_id";

/// Resolved overwrite for an item; `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct MatrixItemChanges<'a> {
    pub platform_id: Option<&'a str>,
    pub format_id: Option<&'a str>,
    pub template_id: Option<DbId>,
    pub copy_id: Option<DbId>,
    pub asset_ids: Option<&'a [DbId]>,
    pub status_id: Option<StatusId>,
}

/// Provides CRUD operations for matrix items.
pub struct MatrixItemRepo;

impl MatrixItemRepo {
    /// Insert a new `draft` item. `client_id` is copied from the parent matrix.
    pub async fn create(
        pool: &PgPool,
        matrix_id: DbId,
        client_id: DbId,
        input: &CreateMatrixItem,
        asset_ids: &[DbId],
    ) -> Result<MatrixItem, sqlx::Error> {
        let query = format!(
            "WITH i AS (
                INSERT INTO visual_matrix_items
                    (matrix_id, client_id, platform_id, format_id, template_id, copy_id,
                     asset_ids, status_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
             )
             SELECT {COLUMNS} FROM i {JOIN}"
        );
        sqlx::query_as::<_, MatrixItem>(&query)
            .bind(matrix_id)
            .bind(client_id)
            .bind(&input.platform_id)
            .bind(&input.format_id)
            .bind(input.template_id)
            .bind(input.copy_id)
            .bind(asset_ids)
            .bind(MatrixItemStatus::Draft.id())
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MatrixItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visual_matrix_items i {JOIN} WHERE i.id = $1");
        sqlx::query_as::<_, MatrixItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a matrix's items in insertion order, optionally by status.
    pub async fn list_by_matrix(
        pool: &PgPool,
        matrix_id: DbId,
        status_id: Option<StatusId>,
    ) -> Result<Vec<MatrixItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visual_matrix_items i {JOIN}
             WHERE i.matrix_id = $1 AND ($2::SMALLINT IS NULL OR i.status_id = $2)
             ORDER BY i.id ASC"
        );
        sqlx::query_as::<_, MatrixItem>(&query)
            .bind(matrix_id)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the given fields. Returns `None` if the item does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &MatrixItemChanges<'_>,
    ) -> Result<Option<MatrixItem>, sqlx::Error> {
        let query = format!(
            "WITH i AS (
                UPDATE visual_matrix_items SET
                    platform_id = COALESCE($2, platform_id),
                    format_id = COALESCE($3, format_id),
                    template_id = COALESCE($4, template_id),
                    copy_id = COALESCE($5, copy_id),
                    asset_ids = COALESCE($6, asset_ids),
                    status_id = COALESCE($7, status_id)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM i {JOIN}"
        );
        sqlx::query_as::<_, MatrixItem>(&query)
            .bind(id)
            .bind(changes.platform_id)
            .bind(changes.format_id)
            .bind(changes.template_id)
            .bind(changes.copy_id)
            .bind(changes.asset_ids)
            .bind(changes.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite only the status. Any status may replace any other.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: MatrixItemStatus,
    ) -> Result<Option<MatrixItem>, sqlx::Error> {
        let changes = MatrixItemChanges {
            status_id: Some(status.id()),
            ..Default::default()
        };
        Self::update(pool, id, &changes).await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM visual_matrix_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
