use std::sync::Arc;

use adforge_core::generation::ContentGenerator;
use adforge_core::storage::ObjectStorage;

use crate::config::ServerConfig;
use crate::notifications::ResetNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: adforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where uploaded asset bytes live.
    pub storage: Arc<dyn ObjectStorage>,
    /// Motivation and copy generator.
    pub generator: Arc<dyn ContentGenerator>,
    /// Delivers password reset links.
    pub reset_notifier: Arc<dyn ResetNotifier>,
}
