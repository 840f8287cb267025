//! Object storage for uploaded asset files.
//!
//! Keys are relative, slash-separated paths such as `12/image/abc123.png`.
//! [`LocalStorage`] maps them below a root directory and the API serves that
//! directory statically, so a key's public URL is `{base_url}/{key}`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::error::CoreError;

/// Maximum length of a storage key in bytes.
pub const MAX_KEY_LENGTH: usize = 512;

/// Reject keys that are empty, absolute, or escape the storage root.
pub fn validate_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Storage key must be between 1 and {MAX_KEY_LENGTH} bytes"
        )));
    }
    if key.contains('\\') || key.contains('\0') {
        return Err(CoreError::Validation(format!(
            "Storage key '{key}' contains invalid characters"
        )));
    }
    let safe = Path::new(key)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !safe || key.starts_with('/') {
        return Err(CoreError::Validation(format!(
            "Storage key '{key}' must be a relative path without '..' segments"
        )));
    }
    Ok(())
}

/// Storage backend for asset bytes.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CoreError>;

    /// Remove the object at `key`. Missing objects are not an error.
    async fn delete(&self, key: &str) -> Result<(), CoreError>;

    /// Public URL under which the object is served.
    fn public_url(&self, key: &str) -> String;
}

/// Filesystem-backed storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

fn io_error(action: &str, key: &str, err: std::io::Error) -> CoreError {
    CoreError::Internal(format!("Failed to {action} object '{key}': {err}"))
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", key, e))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| io_error("write", key, e))
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("delete", key, e)),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.base_url)
    }
}
