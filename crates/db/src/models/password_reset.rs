//! Password reset token model.

use adforge_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from `password_reset_tokens`. Only the SHA-256 hash of the token is stored.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub used_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
