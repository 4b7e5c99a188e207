//! Cart service.
//!
//! Keeps one cart per user in memory. Adding a product either bumps the
//! quantity of its existing line item or appends a new one; clearing drops
//! the cart entirely. Users and products are taken on trust.

pub mod model;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;

use routes::AppState;
use store::{CartStore, InMemoryCartStore};

/// Port the cart service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8003;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CartStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let api = Router::new()
        .route("/cart/add", post(routes::cart::add::<S>))
        .route("/cart/clear", post(routes::cart::clear::<S>))
        .route("/cart/{user_id}", get(routes::cart::get::<S>))
        .with_state(state);

    common::service_router(api, metrics_handle)
}

/// Creates the default application state with an empty in-memory store.
pub fn create_default_state() -> Arc<AppState<InMemoryCartStore>> {
    Arc::new(AppState {
        carts: InMemoryCartStore::new(),
    })
}
