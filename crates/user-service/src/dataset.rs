//! Static user dataset loading.
//!
//! The dataset is a JSON array of `{id, username, password?, full_name?}`
//! records. It is read once at startup, before the listener is bound.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use common::UserId;
use serde::Deserialize;

use crate::error::DatasetError;

/// One entry of the user dataset, credential included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    /// Missing passwords are treated as the empty string.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Parses dataset bytes into user records.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<UserRecord>, DatasetError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Absolute form of `path`, resolved against the working directory.
///
/// Falls back to `path` unchanged when the working directory is unavailable.
pub fn resolved_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Reads and parses the dataset at `path`.
///
/// Relative paths are resolved against the process working directory. A
/// missing file yields an empty dataset; the service then rejects every
/// login and lookup.
pub async fn load_users(path: &Path) -> Result<Vec<UserRecord>, DatasetError> {
    let resolved = resolved_path(path);
    let bytes = match tokio::fs::read(&resolved).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                path = %resolved.display(),
                "user dataset not found, starting with no users"
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(DatasetError::Io {
                path: resolved,
                source,
            });
        }
    };

    let records = parse_users(&bytes)?;
    tracing::info!(path = %resolved.display(), users = records.len(), "loaded user dataset");
    Ok(records)
}
