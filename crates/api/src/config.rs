use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default upload cap: 50 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Directory uploaded asset files are written to.
    pub storage_root: PathBuf,
    /// URL prefix under which `storage_root` is served.
    pub public_base_url: String,
    /// Largest accepted asset upload in bytes.
    pub max_upload_bytes: usize,
    /// Frontend page that receives `?token=` for password resets.
    pub password_reset_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                |
    /// |-------------------------|----------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                              |
    /// | `PORT`                  | `3000`                                 |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                   |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                   |
    /// | `STORAGE_ROOT`          | `storage`                              |
    /// | `PUBLIC_BASE_URL`       | `http://localhost:3000/files`          |
    /// | `MAX_UPLOAD_BYTES`      | `52428800`                             |
    /// | `PASSWORD_RESET_URL`    | `http://localhost:5173/reset-password` |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let storage_root =
            PathBuf::from(std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "storage".into()));

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/files".into())
            .trim_end_matches('/')
            .to_string();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let password_reset_url = std::env::var("PASSWORD_RESET_URL")
            .unwrap_or_else(|_| "http://localhost:5173/reset-password".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt,
            storage_root,
            public_base_url,
            max_upload_bytes,
            password_reset_url,
        }
    }
}
