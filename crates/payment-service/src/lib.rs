//! Payment service.
//!
//! Records simulated payments per user. There is no payment gateway: any
//! request with a positive amount succeeds immediately and is appended to
//! the user's history, which is never modified afterwards.

pub mod error;
pub mod ledger;
pub mod model;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;

use ledger::{InMemoryPaymentLedger, PaymentLedger};
use routes::AppState;

/// Port the payment service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8004;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<L: PaymentLedger + 'static>(
    state: Arc<AppState<L>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let api = Router::new()
        .route("/pay", post(routes::payments::pay::<L>))
        .route("/payments/{user_id}", get(routes::payments::list::<L>))
        .with_state(state);

    common::service_router(api, metrics_handle)
}

/// Creates the default application state with an empty in-memory ledger.
pub fn create_default_state() -> Arc<AppState<InMemoryPaymentLedger>> {
    Arc::new(AppState {
        ledger: InMemoryPaymentLedger::new(),
    })
}
