//! Schema convention checks run against a migrated database.
//!
//! Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_bootstrap(pool: PgPool) {
    adforge_db::health_check(&pool).await.unwrap();

    for table in ["matrix_item_statuses", "execution_statuses", "roles"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_status_seed_matches_enums(pool: PgPool) {
    use adforge_db::models::status::{ExecutionStatus, MatrixItemStatus};

    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM matrix_item_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    let expected: Vec<(i16, String)> = MatrixItemStatus::ALL
        .iter()
        .map(|s| (s.id(), s.name().to_string()))
        .collect();
    assert_eq!(rows, expected);

    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM execution_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    let expected: Vec<(i16, String)> = ExecutionStatus::ALL
        .iter()
        .map(|s| (s.id(), s.name().to_string()))
        .collect();
    assert_eq!(rows, expected);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_every_table_has_timestamps_and_trigger(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::TEXT FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name <> '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(!tables.is_empty());

    for (table,) in tables {
        let cols: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.columns
             WHERE table_schema = 'public' AND table_name = $1
               AND column_name IN ('created_at', 'updated_at')",
        )
        .bind(&table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(cols.0, 2, "{table} is missing created_at/updated_at");

        let trigger: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.triggers
             WHERE event_object_table = $1 AND trigger_name = $2",
        )
        .bind(&table)
        .bind(format!("trg_{table}_updated_at"))
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(trigger.0 > 0, "{table} is missing its updated_at trigger");
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_foreign_keys_follow_naming(pool: PgPool) {
    let bad: Vec<(String,)> = sqlx::query_as(
        "SELECT constraint_name::TEXT FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type = 'FOREIGN KEY'
           AND constraint_name NOT LIKE 'fk\\_%'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(bad.is_empty(), "foreign keys without fk_ prefix: {bad:?}");
}
