//! Repository for the `assets` table.

use adforge_core::pagination::PageRequest;
use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetFilter, CreateAsset};
use crate::repositories::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, name, asset_type, storage_key, url, tags, metadata, \
                        is_client_provided, created_at, updated_at";

/// Gallery filter clause. `$1` client, `$2` type, `$3` ILIKE pattern.
const FILTER: &str = "client_id = $1
    AND ($2::TEXT IS NULL OR asset_type = $2)
    AND ($3::TEXT IS NULL
         OR name ILIKE $3
         OR EXISTS (SELECT 1 FROM UNNEST(tags) AS t(tag) WHERE t.tag ILIKE $3))";

/// Provides CRUD and gallery search for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets
                (client_id, name, asset_type, storage_key, url, tags, metadata, is_client_provided)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(input.client_id)
            .bind(&input.name)
            .bind(&input.asset_type)
            .bind(&input.storage_key)
            .bind(&input.url)
            .bind(&input.tags)
            .bind(&input.metadata)
            .bind(input.is_client_provided)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of a client's assets, newest first, plus the total match count.
    pub async fn search(
        pool: &PgPool,
        client_id: DbId,
        filter: &AssetFilter,
        page: PageRequest,
    ) -> Result<(Vec<Asset>, i64), sqlx::Error> {
        let pattern = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(contains_pattern);

        let count_query = format!("SELECT COUNT(*) FROM assets WHERE {FILTER}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(client_id)
            .bind(&filter.asset_type)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM assets WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, Asset>(&query)
            .bind(client_id)
            .bind(&filter.asset_type)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok((rows, total))
    }

    /// Replace an asset's tags. Returns `None` if the asset does not exist.
    pub async fn update_tags(
        pool: &PgPool,
        id: DbId,
        tags: &[String],
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("UPDATE assets SET tags = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of the given asset ids that belong to `client_id`.
    pub async fn count_owned(
        pool: &PgPool,
        client_id: DbId,
        ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE client_id = $1 AND id = ANY($2)")
            .bind(client_id)
            .bind(ids)
            .fetch_one(pool)
            .await
    }
}
