//! Client-side reconciliation of booking list fetches.
//!
//! The view keeps the last good result when a refetch fails (stale data
//! beats a blank screen) and applies a last-request-wins discipline: every
//! fetch is issued under a generation number, and responses or errors for a
//! superseded generation are discarded on arrival. Tab badges always come
//! from the backend's unfiltered [`StatusCounts`] aggregate, never from the
//! currently displayed list.

use super::{BookingFilters, BookingGroups, BookingsResponse, GroupSummary, Pagination, StatusCounts};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsView {
    generation: u64,
    loading: bool,
    error: Option<String>,
    data: Option<BookingsResponse>,
    filters: BookingFilters,
}

impl BookingsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly issued fetch. Returns the generation token the
    /// response (or error) must echo to be applied.
    pub fn begin_fetch(&mut self, filters: &BookingFilters) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.filters = filters.clone();
        self.generation
    }

    /// Apply a successful response. Returns `false` when the response
    /// belongs to a superseded fetch and was discarded.
    pub fn apply_response(&mut self, generation: u64, response: BookingsResponse) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.data = Some(response);
        true
    }

    /// Apply a failed fetch. Previously loaded data is kept; only the error
    /// string changes. Stale errors are discarded like stale responses.
    pub fn apply_error(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Filters of the most recent fetch; a retry re-issues these unchanged.
    pub fn filters(&self) -> &BookingFilters {
        &self.filters
    }

    pub fn groups(&self) -> Option<&BookingGroups> {
        self.data.as_ref().map(|data| &data.bookings)
    }

    /// Backend-reported sizes of the filtered result.
    pub fn summary(&self) -> Option<GroupSummary> {
        self.data.as_ref().map(|data| data.summary)
    }

    /// Backend-reported unfiltered aggregate; feeds the tab badges.
    pub fn status_counts(&self) -> Option<StatusCounts> {
        self.data.as_ref().map(|data| data.status_counts)
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.data.as_ref().and_then(|data| data.pagination)
    }

    /// Whether any result (fresh or stale) is available to render.
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
