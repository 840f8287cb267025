//! Role lookup rows (`admin`, `editor`).

use adforge_core::types::DbId;
use sqlx::FromRow;

/// The parts of a `roles` row the application reads.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}
