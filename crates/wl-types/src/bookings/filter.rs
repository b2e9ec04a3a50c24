//! Query filters for the booking list endpoints.

use serde::{Deserialize, Serialize};

use super::BookingStatus;

/// Filter for the booking list endpoints; unset fields mean "all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingFilters {
    /// Filter by a single booking status.
    pub status: Option<BookingStatus>,
    /// Free-text search, matched server-side.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
}

impl BookingFilters {
    /// Create a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: filter by status.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: free-text search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Builder: page number.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Builder: page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Trim the search term; an empty term is not forwarded at all.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);
        normalized
    }

    /// Query-string pairs for the upstream request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let normalized = self.normalized();
        let mut pairs = Vec::new();
        if let Some(status) = &normalized.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(search) = &normalized.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(page) = normalized.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = normalized.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
