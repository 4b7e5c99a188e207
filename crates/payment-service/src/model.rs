//! Payment records and identifiers.

use chrono::{DateTime, Utc};
use common::UserId;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Currency used when a request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Unique identifier for a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random payment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a payment. Payments never leave their initial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Success => write!(f, "success"),
        }
    }
}

/// A request to record a payment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPayment {
    pub user_id: UserId,
    /// A JSON number or a numeric string such as `"12.5"`.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Opaque funding source, e.g. a fake card token.
    #[serde(default)]
    pub source: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl NewPayment {
    /// A payment of `amount` in the default currency with no source.
    pub fn new(user_id: impl Into<UserId>, amount: f64) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            currency: default_currency(),
            source: None,
        }
    }

    /// Sets the currency.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the funding source.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// An immutable record of one simulated transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub user_id: UserId,
    pub amount: f64,
    pub currency: String,
    pub source: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
