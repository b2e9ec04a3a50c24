//! Payment status and wire DTOs.
//!
//! At most one payment record is tracked per booking in this client's model.
//! Absence is rendered explicitly ("No Payment"); the status display never
//! silently defaults to a recognized state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Payment review states. Unknown wire values are carried in `Other` so a
/// newer backend never breaks rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Verified,
    Rejected,
    Other(String),
}

impl PaymentStatus {
    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "verified" => PaymentStatus::Verified,
            "rejected" => PaymentStatus::Rejected,
            _ => PaymentStatus::Other(s.to_string()),
        }
    }

    /// Lowercase wire form; `Other` keeps the original string.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Verified => "verified",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Other(raw) => raw,
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Verified => "Verified",
            PaymentStatus::Rejected => "Rejected",
            PaymentStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PaymentStatus::parse(s))
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PaymentStatus::parse(&raw))
    }
}

/// The payment record attached to a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub receipt_reference: Option<String>,
    pub status: PaymentStatus,
}

/// Label for a booking's payment cell. Absence is explicit.
pub fn payment_label(payment: Option<&PaymentInfo>) -> String {
    match payment {
        None => "No Payment".to_string(),
        Some(payment) => payment.status.label().to_string(),
    }
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
