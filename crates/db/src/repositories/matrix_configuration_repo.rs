//! Repository for the `matrix_configurations` table.

use adforge_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::matrix_configuration::{CreateMatrixConfiguration, MatrixConfiguration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, template_id, field_configurations, created_at, updated_at";

/// Provides create and list operations for matrix configurations.
pub struct MatrixConfigurationRepo;

impl MatrixConfigurationRepo {
    /// Insert a configuration. Keys must already be checked against the template.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateMatrixConfiguration,
    ) -> Result<MatrixConfiguration, sqlx::Error> {
        let query = format!(
            "INSERT INTO matrix_configurations (client_id, template_id, field_configurations)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MatrixConfiguration>(&query)
            .bind(client_id)
            .bind(input.template_id)
            .bind(Json(&input.field_configurations))
            .fetch_one(pool)
            .await
    }

    /// List a client's configurations, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<MatrixConfiguration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matrix_configurations
             WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MatrixConfiguration>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }
}
