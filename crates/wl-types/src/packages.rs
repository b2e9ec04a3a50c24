//! Package catalogue DTOs and the locally staged booking draft.

use serde::{Deserialize, Serialize};

/// A wedding package as listed in the public catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub planner_name: Option<String>,
}

/// Draft staged in browser storage when a client starts a booking.
///
/// Cleared unconditionally on logout along with the session itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub package_id: String,
    pub package_title: String,
}
