//! HTTP handlers for the user service.

pub mod login;
pub mod users;

use crate::store::UserStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: UserStore> {
    pub users: S,
}
