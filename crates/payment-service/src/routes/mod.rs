//! HTTP handlers for the payment service.

pub mod payments;

use crate::ledger::PaymentLedger;

/// Shared application state accessible from all handlers.
pub struct AppState<L: PaymentLedger> {
    pub ledger: L,
}
