//! Shared building blocks for the user, cart and payment services.
//!
//! Each service owns its own routes and in-memory store; this crate only
//! carries what they have in common: identifiers, configuration, error
//! mapping, telemetry, the health/metrics routes and the server loop.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod types;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{ApiError, ServerError};
pub use extract::Json;
pub use types::UserId;

/// Adds `/health`, `/metrics`, CORS and request tracing to a service router.
pub fn service_router(api: Router, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics))
        .with_state(metrics_handle);

    api.route("/health", get(routes::health))
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
