//! Booking domain: status lifecycle, query filters, wire DTOs, and the
//! client-side list reconciliation.

mod filter;
mod status;
mod view;

pub use filter::*;
pub use status::*;
pub use view::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::payments::PaymentInfo;

/// Snapshot of the booked package as it was at booking time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    pub title: String,
    pub price: f64,
}

/// A client's reservation of a planner's package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub status: BookingStatus,
    pub wedding_date: NaiveDate,
    #[serde(default)]
    pub wedding_time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    pub package: PackageSnapshot,
    /// At most one payment record per booking in this client's model.
    #[serde(default)]
    pub payment: Option<PaymentInfo>,
    /// Populated on the planner/admin listing.
    #[serde(default)]
    pub client_name: Option<String>,
}

/// Backend-reported per-status counts for the unfiltered scope.
///
/// These feed the tab badges and must stay stable while search or status
/// filters narrow the visible list; they are never recomputed client-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
}

impl StatusCounts {
    pub fn total(&self) -> i64 {
        self.pending + self.confirmed + self.completed + self.cancelled
    }

    /// Badge count for the derived "upcoming" bucket.
    pub fn upcoming(&self) -> i64 {
        self.pending + self.confirmed
    }

    /// Count for a single status; `None` for statuses we do not track.
    pub fn for_status(&self, status: &BookingStatus) -> Option<i64> {
        match status {
            BookingStatus::Pending => Some(self.pending),
            BookingStatus::Confirmed => Some(self.confirmed),
            BookingStatus::Completed => Some(self.completed),
            BookingStatus::Cancelled => Some(self.cancelled),
            BookingStatus::Other(_) => None,
        }
    }
}

/// Group sizes for the currently filtered result, as reported by the
/// backend. Kept verbatim; not assumed to agree with [`StatusCounts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub upcoming: i64,
    pub completed: i64,
    pub cancelled: i64,
}

/// Bookings bucketed for display; `upcoming` is pending ∪ confirmed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingGroups {
    pub upcoming: Vec<Booking>,
    pub completed: Vec<Booking>,
    pub cancelled: Vec<Booking>,
}

impl BookingGroups {
    /// Bucket a flat list. Unrecognized statuses stay visible in the
    /// upcoming bucket rather than disappearing.
    pub fn group(bookings: Vec<Booking>) -> Self {
        let mut groups = BookingGroups::default();
        for booking in bookings {
            match &booking.status {
                BookingStatus::Completed => groups.completed.push(booking),
                BookingStatus::Cancelled => groups.cancelled.push(booking),
                _ => groups.upcoming.push(booking),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.completed.len() + self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Local group sizes of this (filtered) result.
    pub fn local_summary(&self) -> GroupSummary {
        GroupSummary {
            upcoming: self.upcoming.len() as i64,
            completed: self.completed.len() as i64,
            cancelled: self.cancelled.len() as i64,
        }
    }
}

/// Pagination info echoed by the list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Response shape of the booking list endpoints.
///
/// `summary` tracks the filtered result while `status_counts` covers the
/// unfiltered scope; they are two independent backend aggregates and are
/// both kept as reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub bookings: BookingGroups,
    pub summary: GroupSummary,
    #[serde(rename = "statusCounts")]
    pub status_counts: StatusCounts,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}
