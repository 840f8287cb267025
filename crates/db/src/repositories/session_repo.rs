//! Repository for the `user_sessions` table.
//!
//! Refresh tokens are single-use: [`SessionRepo::redeem`] revokes the row in
//! the same statement that reads it, so two concurrent refreshes with the
//! same token cannot both succeed.

use adforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::NewSession;

pub struct SessionRepo;

impl SessionRepo {
    /// Store a session for a freshly issued refresh token. Returns its id.
    pub async fn open(pool: &PgPool, session: &NewSession<'_>) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(session.user_id)
        .bind(session.refresh_token_hash)
        .bind(session.expires_at)
        .bind(session.user_agent)
        .fetch_one(pool)
        .await
    }

    /// Spend a refresh token.
    ///
    /// Returns the owning user id when the token matched a live session, and
    /// `None` when it is unknown, expired, or already spent.
    pub async fn redeem(pool: &PgPool, refresh_token_hash: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE user_sessions SET is_revoked = true
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()
             RETURNING user_id",
        )
        .bind(refresh_token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Sign a user out everywhere: logout, password change, and password
    /// reset all end every live session. Returns how many were ended.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true
             WHERE user_id = $1 AND is_revoked = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
