//! Repository for the seeded `roles` lookup table.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Read-only access to roles; the set is fixed by migrations.
pub struct RoleRepo;

impl RoleRepo {
    /// Look up a seeded role by name, e.g. [`adforge_core::roles::ROLE_EDITOR`].
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Name of the role a user holds, for token claims and profiles.
    ///
    /// `users.role_id` is a foreign key, so the row always exists.
    pub async fn name_of(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await
    }
}
