//! Payment service error types.

use common::ApiError;
use thiserror::Error;

/// Errors returned by payment ledger operations.
#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    /// The amount is zero, negative or not a finite number.
    #[error("Payment amount must be > 0, got {0}")]
    InvalidAmount(f64),
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount(_) => ApiError::Unprocessable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_invalid_amount_maps_to_422() {
        let api: ApiError = PaymentError::InvalidAmount(-5.0).into();
        assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_amount_message() {
        assert_eq!(
            PaymentError::InvalidAmount(0.0).to_string(),
            "Payment amount must be > 0, got 0"
        );
    }
}
