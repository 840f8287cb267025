//! Refresh-token sessions.
//!
//! A session exists only to redeem one refresh token. The row is never
//! returned to clients, so there is no response DTO.

use adforge_core::types::{DbId, Timestamp};

/// Insert payload for a session opened by login or refresh.
#[derive(Debug, Clone, Copy)]
pub struct NewSession<'a> {
    pub user_id: DbId,
    /// SHA-256 hex digest of the refresh token handed to the client.
    pub refresh_token_hash: &'a str,
    pub expires_at: Timestamp,
    pub user_agent: Option<&'a str>,
}
