//! User service configuration.

use std::path::PathBuf;

use common::Config;

/// Port the user service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8001;

/// Dataset path used when `USERS_FILE` is unset.
///
/// Relative, so it is looked up in the working directory the service was
/// started from; set `USERS_FILE` to an absolute path to avoid surprises.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Server settings plus the location of the user dataset.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub server: Config,
    pub users_file: PathBuf,
}

impl UserServiceConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let users_file = lookup("USERS_FILE").unwrap_or_else(|| DEFAULT_USERS_FILE.to_string());
        Self {
            server: Config::from_lookup(DEFAULT_PORT, lookup),
            users_file: PathBuf::from(users_file),
        }
    }
}
