//! Booking status lifecycle.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Booking lifecycle states.
///
/// `pending → {confirmed, cancelled}`, `confirmed → {completed, cancelled}`;
/// `completed` and `cancelled` are terminal. Unknown wire values are carried
/// in `Other` and treated as terminal — no transition is assumed possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Other(String),
}

static PENDING_NEXT: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::Cancelled];
static CONFIRMED_NEXT: [BookingStatus; 2] = [BookingStatus::Completed, BookingStatus::Cancelled];

impl BookingStatus {
    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(s.to_string()),
        }
    }

    /// Lowercase wire form; `Other` keeps the original string.
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    /// States this booking may legally move to next.
    pub fn transitions(&self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &PENDING_NEXT,
            BookingStatus::Confirmed => &CONFIRMED_NEXT,
            BookingStatus::Completed | BookingStatus::Cancelled | BookingStatus::Other(_) => &[],
        }
    }

    pub fn can_transition_to(&self, next: &BookingStatus) -> bool {
        self.transitions().contains(next)
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions().is_empty()
    }

    /// Pending and confirmed bookings make up the "upcoming" bucket.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BookingStatus::parse(s))
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::parse(&raw))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
