//! User service.
//!
//! Holds a fixed roster of users loaded once from a static JSON dataset and
//! exposes login (credential check) and lookup by ID. Passwords are compared
//! in plaintext and are never returned.
//!
//! The dataset path comes from `USERS_FILE` (default `users.json`) and is
//! resolved against the process working directory. The resolved absolute
//! path is logged at startup, at `warn` when the file is missing.

pub mod config;
pub mod dataset;
pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;

use dataset::UserRecord;
use routes::AppState;
use store::{InMemoryUserStore, UserStore};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: UserStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let api = Router::new()
        .route("/login", post(routes::login::login::<S>))
        .route("/user/{user_id}", get(routes::users::get::<S>))
        .with_state(state);

    common::service_router(api, metrics_handle)
}

/// Creates the default application state from dataset records.
pub fn create_default_state(records: Vec<UserRecord>) -> Arc<AppState<InMemoryUserStore>> {
    Arc::new(AppState {
        users: InMemoryUserStore::from_records(records),
    })
}
