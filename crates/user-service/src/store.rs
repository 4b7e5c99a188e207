//! User store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::UserId;
use serde::{Deserialize, Serialize};

use crate::dataset::UserRecord;
use crate::error::UserError;

/// Public view of a user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub full_name: Option<String>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
        }
    }
}

/// Trait for user lookup and credential checks.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Checks a username/password pair.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// [`UserError::InvalidCredentials`].
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError>;

    /// Looks a user up by ID.
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Returns the number of distinct user IDs known to the store.
    async fn user_count(&self) -> usize;
}

#[derive(Debug)]
struct Credential {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct UserIndex {
    by_id: HashMap<UserId, User>,
    by_username: HashMap<String, Credential>,
}

/// Read-only user store built once from the dataset.
///
/// Records are indexed by both ID and username. When the dataset repeats
/// an ID or a username, the later record wins for that index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    index: Arc<UserIndex>,
}

impl InMemoryUserStore {
    /// Creates a store with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the indexes from dataset records.
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let mut index = UserIndex::default();
        for record in records {
            let user = User::from(&record);
            index.by_id.insert(user.id.clone(), user.clone());
            index.by_username.insert(
                record.username,
                Credential {
                    user,
                    password: record.password,
                },
            );
        }

        Self {
            index: Arc::new(index),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError> {
        let outcome = match self.index.by_username.get(username) {
            Some(credential) if credential.password == password => Ok(credential.user.clone()),
            _ => Err(UserError::InvalidCredentials),
        };

        let label = if outcome.is_ok() { "success" } else { "failure" };
        metrics::counter!("user_logins_total", "outcome" => label).increment(1);
        outcome
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        let outcome = self
            .index
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| UserError::NotFound(id.clone()));

        let label = if outcome.is_ok() { "found" } else { "not_found" };
        metrics::counter!("user_lookups_total", "outcome" => label).increment(1);
        outcome
    }

    async fn user_count(&self) -> usize {
        self.index.by_id.len()
    }
}
