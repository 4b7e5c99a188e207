//! Error types shared by the services.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Services convert their domain errors into this type so handlers can use
/// `?`. The body is always `{"detail": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// Credentials were rejected.
    Unauthorized(String),
    /// Resource not found.
    NotFound(String),
    /// The request was well-formed but its values are not acceptable.
    Unprocessable(String),
    /// The body could not be extracted; keeps the extractor's status.
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Rejected { message: msg, .. } => msg,
        };

        tracing::debug!(%status, detail = %message, "request rejected");
        let body = serde_json::json!({ "detail": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Errors that stop a service from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),
}
