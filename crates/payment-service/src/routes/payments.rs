//! Payment endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use common::{ApiError, Json, UserId};
use serde::Serialize;

use super::AppState;
use crate::ledger::PaymentLedger;
use crate::model::{NewPayment, Payment, PaymentId, PaymentStatus};

// -- Response types --

#[derive(Serialize)]
pub struct PaymentResponse {
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
}

#[derive(Serialize)]
pub struct UserPaymentsResponse {
    pub user_id: UserId,
    pub payments: Vec<Payment>,
}

// -- Handlers --

/// POST /pay — record a simulated payment. Always succeeds for `amount > 0`.
#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id, currency = %req.currency))]
pub async fn pay<L: PaymentLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Json(req): Json<NewPayment>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let payment = state.ledger.create_payment(req).await?;

    tracing::info!(payment_id = %payment.id, amount = payment.amount, "payment recorded");
    Ok(Json(PaymentResponse {
        payment_id: payment.id,
        status: payment.status,
    }))
}

/// GET /payments/{user_id} — list a user's payments, oldest first.
#[tracing::instrument(skip(state))]
pub async fn list<L: PaymentLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Path(user_id): Path<UserId>,
) -> Json<UserPaymentsResponse> {
    let payments = state.ledger.get_payments(&user_id).await;
    Json(UserPaymentsResponse { user_id, payments })
}
