//! Payment ledger trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::UserId;
use tokio::sync::RwLock;

use crate::error::PaymentError;
use crate::model::{NewPayment, Payment, PaymentId, PaymentStatus};

/// Trait for recording and listing payments.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Records a payment. There is no gateway: every valid request succeeds.
    ///
    /// Fails with [`PaymentError::InvalidAmount`] unless `amount > 0`, in
    /// which case nothing is recorded.
    async fn create_payment(&self, request: NewPayment) -> Result<Payment, PaymentError>;

    /// Returns the user's payments in creation order.
    async fn get_payments(&self, user_id: &UserId) -> Vec<Payment>;
}

/// Currencies reported under their own metric label; everything else is `"other"`.
const LABELLED_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY"];

/// Maps a client-supplied currency onto a bounded set of metric labels.
pub fn currency_label(currency: &str) -> &'static str {
    LABELLED_CURRENCIES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(currency))
        .unwrap_or("other")
}

/// Checks that an amount is a positive finite number.
pub fn validate_amount(amount: f64) -> Result<(), PaymentError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PaymentError::InvalidAmount(amount));
    }
    Ok(())
}

/// In-memory payment ledger. Append-only, unbounded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentLedger {
    payments: Arc<RwLock<HashMap<UserId, Vec<Payment>>>>,
}

impl InMemoryPaymentLedger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of payments across all users.
    pub async fn payment_count(&self) -> usize {
        self.payments.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn create_payment(&self, request: NewPayment) -> Result<Payment, PaymentError> {
        if let Err(err) = validate_amount(request.amount) {
            metrics::counter!("payments_rejected_total").increment(1);
            return Err(err);
        }

        let payment = Payment {
            id: PaymentId::new(),
            user_id: request.user_id,
            amount: request.amount,
            currency: request.currency,
            source: request.source,
            status: PaymentStatus::Success,
            created_at: Utc::now(),
        };

        self.payments
            .write()
            .await
            .entry(payment.user_id.clone())
            .or_default()
            .push(payment.clone());

        metrics::counter!("payments_created_total", "currency" => currency_label(&payment.currency))
            .increment(1);
        metrics::histogram!("payment_amount").record(payment.amount);
        Ok(payment)
    }

    async fn get_payments(&self, user_id: &UserId) -> Vec<Payment> {
        self.payments
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_currency_label_is_bounded() {
        assert_eq!(currency_label("USD"), "USD");
        assert_eq!(currency_label("eur"), "EUR");
        assert_eq!(currency_label("DOGE"), "other");
        assert_eq!(currency_label(""), "other");
        assert_eq!(currency_label(&"X".repeat(1024)), "other");
    }

    #[tokio::test]
    async fn test_create_payment_succeeds() {
        let ledger = InMemoryPaymentLedger::new();
        let payment = ledger
            .create_payment(NewPayment::new("u1", 42.5).source("tok_visa"))
            .await
            .unwrap();

        assert_eq!(payment.status, PaymentStatus::Success);
        assert_eq!(payment.user_id, UserId::new("u1"));
        assert_eq!(payment.amount, 42.5);
        assert_eq!(payment.currency, "USD");
        assert_eq!(payment.source.as_deref(), Some("tok_visa"));
        assert_eq!(ledger.payment_count().await, 1);
    }

    #[tokio::test]
    async fn test_non_positive_amounts_are_rejected_and_not_recorded() {
        let ledger = InMemoryPaymentLedger::new();
        for amount in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ledger
                .create_payment(NewPayment::new("u1", amount))
                .await
                .unwrap_err();
            assert!(matches!(err, PaymentError::InvalidAmount(_)));
        }

        assert_eq!(ledger.payment_count().await, 0);
        assert!(ledger.get_payments(&UserId::new("u1")).await.is_empty());
    }

    #[tokio::test]
    async fn test_smallest_positive_amount_is_accepted() {
        let ledger = InMemoryPaymentLedger::new();
        assert!(
            ledger
                .create_payment(NewPayment::new("u1", 0.01))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_payment_ids_are_unique() {
        let ledger = InMemoryPaymentLedger::new();
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let payment = ledger
                .create_payment(NewPayment::new("u1", 1.0))
                .await
                .unwrap();
            assert!(ids.insert(payment.id));
        }
    }

    #[tokio::test]
    async fn test_get_payments_in_creation_order() {
        let ledger = InMemoryPaymentLedger::new();
        let mut created = Vec::new();
        for amount in [3.0, 1.0, 2.0] {
            created.push(
                ledger
                    .create_payment(NewPayment::new("u1", amount))
                    .await
                    .unwrap(),
            );
        }

        let listed = ledger.get_payments(&UserId::new("u1")).await;
        assert_eq!(listed, created);
        let amounts: Vec<f64> = listed.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![3.0, 1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_get_payments_for_unknown_user_is_empty() {
        let ledger = InMemoryPaymentLedger::new();
        ledger
            .create_payment(NewPayment::new("u1", 5.0))
            .await
            .unwrap();

        assert!(ledger.get_payments(&UserId::new("u2")).await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_payments_are_all_recorded() {
        let ledger = InMemoryPaymentLedger::new();
        let mut handles = Vec::new();
        for i in 0..50 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger
                    .create_payment(NewPayment::new("u1", f64::from(i + 1)))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(ledger.get_payments(&UserId::new("u1")).await.len(), 50);
    }
}
