//! Delivery of password reset links.
//!
//! Outbound email is not wired up; [`LogResetNotifier`] writes the link to
//! the log so an operator can hand it on.

use async_trait::async_trait;

/// Delivers a password reset link to a user.
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_link(&self, email: &str, link: &str);
}

/// Logs reset links at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogResetNotifier;

#[async_trait]
impl ResetNotifier for LogResetNotifier {
    async fn send_reset_link(&self, email: &str, link: &str) {
        tracing::info!(email, link, "Password reset link issued");
    }
}

/// Append the reset token to the frontend reset page URL.
pub fn reset_link(base_url: &str, token: &str) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{sep}token={token}")
}
