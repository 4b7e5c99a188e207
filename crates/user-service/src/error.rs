//! User service error types.

use std::path::PathBuf;

use common::{ApiError, ServerError, UserId};
use thiserror::Error;

/// Message returned for every rejected login, whichever field was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Errors returned by user store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// Unknown username or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No user has the given ID.
    #[error("User not found: {0}")]
    NotFound(UserId),
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
        }
    }
}

/// Errors raised while loading the user dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file exists but could not be read.
    #[error("failed to read user dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON array of user records.
    #[error("malformed user dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that abort service startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
