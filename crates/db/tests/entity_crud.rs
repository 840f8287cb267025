//! Repository-level integration tests.
//!
//! Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use std::collections::BTreeMap;

use adforge_core::pagination::PageRequest;
use adforge_db::models::asset::{AssetFilter, CreateAsset};
use adforge_db::models::client::{CreateClient, UpdateClient};
use adforge_db::models::copy_variation::CreateCopyVariation;
use adforge_db::models::matrix::{CreateMatrix, CreateMatrixItem};
use adforge_db::models::matrix_configuration::CreateMatrixConfiguration;
use adforge_db::models::status::{ExecutionStatus, MatrixItemStatus};
use adforge_db::models::template::CreateTemplate;
use adforge_db::models::session::NewSession;
use adforge_db::models::user::CreateUser;
use adforge_db::repositories::matrix_item_repo::MatrixItemChanges;
use adforge_db::repositories::{
    AssetRepo, ClientRepo, CopyVariationRepo, ExecutionRepo, MatrixConfigurationRepo,
    MatrixItemRepo, MatrixRepo, MotivationRepo, PasswordResetRepo, RoleRepo, SessionRepo,
    TemplateRepo, UserRepo,
};
use assert_matches::assert_matches;
use sqlx::PgPool;

async fn new_client(pool: &PgPool, name: &str) -> i64 {
    ClientRepo::create(
        pool,
        &CreateClient {
            name: name.to_string(),
            branding_colors: vec!["#112233".to_string()],
        },
    )
    .await
    .unwrap()
    .id
}

fn asset(client_id: i64, name: &str, asset_type: &str, tags: &[&str]) -> CreateAsset {
    CreateAsset {
        client_id,
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        storage_key: format!("{client_id}/{asset_type}/{name}"),
        url: format!("http://localhost/files/{client_id}/{asset_type}/{name}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata: serde_json::json!({ "size": 10, "content_type": "image/png" }),
        is_client_provided: false,
    }
}

fn template(name: &str, fields: &[&str]) -> CreateTemplate {
    CreateTemplate {
        name: name.to_string(),
        description: None,
        external_template_id: format!("ext-{name}"),
        aspect_ratio: None,
        dynamic_fields: fields.iter().map(|f| f.to_string()).collect(),
    }
}

/// Client with a template, a motivation, and one copy variation.
async fn content_fixture(pool: &PgPool) -> (i64, i64, i64) {
    let client_id = new_client(pool, "Fixture Co").await;
    let fields = vec!["headline".to_string()];
    let tpl = TemplateRepo::create(pool, client_id, &template("Promo", &[]), &fields)
        .await
        .unwrap();
    let motivation = MotivationRepo::create(pool, client_id, "Save time", None)
        .await
        .unwrap();
    let copy = CopyVariationRepo::create(
        pool,
        client_id,
        &CreateCopyVariation {
            motivation_id: motivation.id,
            content: "Save time with a warm tone.".to_string(),
            tone: "Friendly".to_string(),
            length: "short".to_string(),
            variation_number: 1,
        },
    )
    .await
    .unwrap();
    (client_id, tpl.id, copy.id)
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_client_crud_and_case_insensitive_uniqueness(pool: PgPool) {
    let id = new_client(&pool, "Acme").await;

    let dup = ClientRepo::create(
        &pool,
        &CreateClient {
            name: "ACME".to_string(),
            branding_colors: vec![],
        },
    )
    .await;
    assert_matches!(dup, Err(sqlx::Error::Database(ref e)) if e.constraint() == Some("uq_clients_name"));

    let updated = ClientRepo::update(
        &pool,
        id,
        &UpdateClient {
            name: None,
            branding_colors: Some(vec!["#000000".to_string(), "#ffffff".to_string()]),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.branding_colors.len(), 2);

    new_client(&pool, "beta").await;
    let names: Vec<String> = ClientRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Acme", "beta"]);

    assert!(ClientRepo::delete(&pool, id).await.unwrap());
    assert!(ClientRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_asset_search_filters_and_paginates(pool: PgPool) {
    let client_id = new_client(&pool, "Gallery").await;
    let other = new_client(&pool, "Other").await;

    AssetRepo::create(&pool, &asset(client_id, "hero.png", "image", &["summer"]))
        .await
        .unwrap();
    AssetRepo::create(&pool, &asset(client_id, "spot.mp4", "video", &["Summer Sale"]))
        .await
        .unwrap();
    AssetRepo::create(&pool, &asset(client_id, "logo.svg", "image", &["brand"]))
        .await
        .unwrap();
    AssetRepo::create(&pool, &asset(other, "summer.png", "image", &[]))
        .await
        .unwrap();

    let page = PageRequest::new(None, None);

    let (rows, total) = AssetRepo::search(&pool, client_id, &AssetFilter::default(), page)
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 3);

    let by_tag = AssetFilter {
        asset_type: None,
        search: Some("SUMMER".to_string()),
    };
    let (_, total) = AssetRepo::search(&pool, client_id, &by_tag, page).await.unwrap();
    assert_eq!(total, 2);

    let images_only = AssetFilter {
        asset_type: Some("image".to_string()),
        search: Some("summer".to_string()),
    };
    let (rows, total) = AssetRepo::search(&pool, client_id, &images_only, page)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "hero.png");

    let (rows, total) = AssetRepo::search(
        &pool,
        client_id,
        &AssetFilter::default(),
        PageRequest::new(Some(2), Some(2)),
    )
    .await
    .unwrap();
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 1);

    let wildcard = AssetFilter {
        asset_type: None,
        search: Some("%".to_string()),
    };
    let (_, total) = AssetRepo::search(&pool, client_id, &wildcard, page).await.unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_asset_tags_replace(pool: PgPool) {
    let client_id = new_client(&pool, "Tags").await;
    let created = AssetRepo::create(&pool, &asset(client_id, "a.png", "image", &["old"]))
        .await
        .unwrap();

    let updated = AssetRepo::update_tags(&pool, created.id, &["new".to_string()])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.tags, vec!["new"]);

    assert!(AssetRepo::delete(&pool, created.id).await.unwrap());
    assert!(!AssetRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_template_defaults_aspect_ratio(pool: PgPool) {
    let client_id = new_client(&pool, "Templates").await;
    let fields = vec!["headline".to_string(), "cta".to_string()];
    let tpl = TemplateRepo::create(&pool, client_id, &template("Promo", &[]), &fields)
        .await
        .unwrap();
    assert_eq!(tpl.aspect_ratio, "16:9");
    assert_eq!(tpl.dynamic_fields, fields);

    let listed = TemplateRepo::list_by_client(&pool, client_id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_motivations_and_copy(pool: PgPool) {
    let client_id = new_client(&pool, "Content").await;
    let contents = vec!["One".to_string(), "Two".to_string()];
    let created = MotivationRepo::create_many(&pool, client_id, &contents, None)
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|m| !m.is_approved));
    assert_eq!(created[0].content, "One");

    let approved = MotivationRepo::set_approved(&pool, created[0].id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(approved.is_approved);

    let inputs: Vec<CreateCopyVariation> = (1..=3)
        .map(|n| CreateCopyVariation {
            motivation_id: created[0].id,
            content: format!("Copy {n}"),
            tone: "Professional".to_string(),
            length: "medium".to_string(),
            variation_number: n,
        })
        .collect();
    let copies = CopyVariationRepo::create_many(&pool, client_id, &inputs)
        .await
        .unwrap();
    assert_eq!(
        copies.iter().map(|c| c.variation_number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let for_other = CopyVariationRepo::list_by_client(&pool, client_id, Some(created[1].id))
        .await
        .unwrap();
    assert!(for_other.is_empty());

    // Deleting the motivation cascades to its copy.
    assert!(MotivationRepo::delete(&pool, created[0].id).await.unwrap());
    let remaining = CopyVariationRepo::list_by_client(&pool, client_id, None)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_matrix_items_status_overwrite(pool: PgPool) {
    let (client_id, template_id, copy_id) = content_fixture(&pool).await;
    let matrix = MatrixRepo::create(
        &pool,
        client_id,
        &CreateMatrix {
            name: "Q3".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let item = MatrixItemRepo::create(
        &pool,
        matrix.id,
        client_id,
        &CreateMatrixItem {
            platform_id: "instagram".to_string(),
            format_id: "story".to_string(),
            template_id,
            copy_id,
            asset_ids: vec![],
        },
        &[],
    )
    .await
    .unwrap();
    assert_eq!(item.status, "draft");
    assert_eq!(item.status_id, MatrixItemStatus::Draft.id());

    // No transition rules: draft -> approved -> draft are all allowed.
    let approved = MatrixItemRepo::set_status(&pool, item.id, MatrixItemStatus::Approved)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, "approved");
    let back = MatrixItemRepo::set_status(&pool, item.id, MatrixItemStatus::Draft)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(back.status, "draft");

    let moved = MatrixItemRepo::update(
        &pool,
        item.id,
        &MatrixItemChanges {
            format_id: Some("reel"),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.format_id, "reel");
    assert_eq!(moved.platform_id, "instagram");

    let drafts = MatrixItemRepo::list_by_matrix(&pool, matrix.id, Some(MatrixItemStatus::Draft.id()))
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    let rejected =
        MatrixItemRepo::list_by_matrix(&pool, matrix.id, Some(MatrixItemStatus::Rejected.id()))
            .await
            .unwrap();
    assert!(rejected.is_empty());

    let summary = ClientRepo::summary(&pool, client_id).await.unwrap();
    assert_eq!(summary.matrix_count, 1);
    assert_eq!(summary.matrix_items_by_status.len(), 4);
    assert_eq!(summary.matrix_items_by_status[0].status, "draft");
    assert_eq!(summary.matrix_items_by_status[0].count, 1);

    assert!(MatrixRepo::delete(&pool, matrix.id).await.unwrap());
    assert!(MatrixItemRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_matrix_item_foreign_key_violation(pool: PgPool) {
    let (client_id, _, copy_id) = content_fixture(&pool).await;
    let matrix = MatrixRepo::create(
        &pool,
        client_id,
        &CreateMatrix {
            name: "FK".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let result = MatrixItemRepo::create(
        &pool,
        matrix.id,
        client_id,
        &CreateMatrixItem {
            platform_id: "email".to_string(),
            format_id: "newsletter".to_string(),
            template_id: 999_999,
            copy_id,
            asset_ids: vec![],
        },
        &[],
    )
    .await;
    assert_matches!(result, Err(sqlx::Error::Database(ref e)) if e.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_configurations_and_executions(pool: PgPool) {
    let (client_id, template_id, _) = content_fixture(&pool).await;

    let mut fields = BTreeMap::new();
    fields.insert(
        "headline".to_string(),
        vec!["Hello".to_string(), "Hi".to_string()],
    );
    let config = MatrixConfigurationRepo::create(
        &pool,
        client_id,
        &CreateMatrixConfiguration {
            template_id,
            field_configurations: fields,
        },
    )
    .await
    .unwrap();
    assert_eq!(config.field_configurations["headline"][1], "Hi");
    assert_eq!(
        MatrixConfigurationRepo::list_by_client(&pool, client_id)
            .await
            .unwrap()
            .len(),
        1
    );

    let matrix = MatrixRepo::create(
        &pool,
        client_id,
        &CreateMatrix {
            name: "Render".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let exec = ExecutionRepo::create(&pool, client_id, matrix.id).await.unwrap();
    assert_eq!(exec.status, "pending");
    assert!(exec.output_url.is_none());

    let done = ExecutionRepo::update_status(
        &pool,
        exec.id,
        ExecutionStatus::Completed,
        Some("https://cdn.example.com/out.mp4"),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(done.status, "completed");

    // output_url survives a status-only update.
    let again = ExecutionRepo::update_status(&pool, exec.id, ExecutionStatus::Failed, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.status, "failed");
    assert_eq!(
        again.output_url.as_deref(),
        Some("https://cdn.example.com/out.mp4")
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_users_sessions_and_reset_tokens(pool: PgPool) {
    let role = RoleRepo::find_by_name(&pool, "editor").await.unwrap().unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "ana@example.com".to_string(),
            full_name: Some("Ana".to_string()),
            password_hash: "hash".to_string(),
            role_id: role.id,
        },
    )
    .await
    .unwrap();
    assert!(UserRepo::find_by_email(&pool, "ANA@example.com")
        .await
        .unwrap()
        .is_some());

    let expires_at = chrono::Utc::now() + chrono::Duration::days(1);
    let new_session = |hash: &'static str| NewSession {
        user_id: user.id,
        refresh_token_hash: hash,
        expires_at,
        user_agent: Some("tests"),
    };
    SessionRepo::open(&pool, &new_session("abc")).await.unwrap();
    assert_eq!(SessionRepo::redeem(&pool, "abc").await.unwrap(), Some(user.id));
    // Single use.
    assert_eq!(SessionRepo::redeem(&pool, "abc").await.unwrap(), None);
    assert_eq!(SessionRepo::redeem(&pool, "unknown").await.unwrap(), None);

    SessionRepo::open(&pool, &new_session("def")).await.unwrap();
    SessionRepo::open(&pool, &new_session("ghi")).await.unwrap();
    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 2);
    assert_eq!(SessionRepo::redeem(&pool, "def").await.unwrap(), None);

    assert_eq!(RoleRepo::name_of(&pool, role.id).await.unwrap(), "editor");

    let token = PasswordResetRepo::create(
        &pool,
        user.id,
        "reset-hash",
        chrono::Utc::now() + chrono::Duration::hours(1),
    )
    .await
    .unwrap();
    assert!(PasswordResetRepo::find_valid_by_hash(&pool, "reset-hash")
        .await
        .unwrap()
        .is_some());
    assert!(PasswordResetRepo::mark_used(&pool, token.id).await.unwrap());
    assert!(!PasswordResetRepo::mark_used(&pool, token.id).await.unwrap());
    assert!(PasswordResetRepo::find_valid_by_hash(&pool, "reset-hash")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_logins_lock_and_reset(pool: PgPool) {
    let role = RoleRepo::find_by_name(&pool, "editor").await.unwrap().unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "lock@example.com".to_string(),
            full_name: None,
            password_hash: "hash".to_string(),
            role_id: role.id,
        },
    )
    .await
    .unwrap();

    for _ in 0..4 {
        assert_eq!(UserRepo::record_failed_login(&pool, user.id, 5, 15).await.unwrap(), None);
    }
    let locked = UserRepo::record_failed_login(&pool, user.id, 5, 15).await.unwrap();
    assert_matches!(locked, Some(until) if until > chrono::Utc::now());

    let (count, _): (i32, Option<chrono::DateTime<chrono::Utc>>) =
        sqlx::query_as("SELECT failed_login_count, locked_until FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);

    // Once the lock lapses a single miss neither re-locks nor keeps the lock.
    sqlx::query("UPDATE users SET locked_until = NOW() - INTERVAL '1 minute' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(UserRepo::record_failed_login(&pool, user.id, 5, 15).await.unwrap(), None);
    let (count, locked_until): (i32, Option<chrono::DateTime<chrono::Utc>>) =
        sqlx::query_as("SELECT failed_login_count, locked_until FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
    assert!(locked_until.is_none());
}
