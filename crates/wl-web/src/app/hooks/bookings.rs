//! Booking list state shared by the client and planner booking screens.
//!
//! The hook owns a [`BookingsView`] and keeps its discipline: one network
//! call per filter change, a 500 ms debounce on free-text search, and
//! generation-tagged fetches so a slow superseded response can never
//! overwrite a fresher one. Failed fetches leave the previous result in
//! place next to the error string; `retry` re-issues the same request.

use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use wl_types::bookings::{BookingFilters, BookingStatus, BookingsView};

use crate::app::api;

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Which listing a hook instance is bound to.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    /// The signed-in client's own bookings.
    Mine,
    /// Bookings on the planner/admin management listing.
    Managed,
}

/// Handle returned by [`use_bookings`]. Copyable into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct BookingsHandle {
    pub view: Signal<BookingsView>,
    /// Raw search box contents, updated per keystroke; filters lag behind
    /// it by the debounce.
    pub search_input: Signal<String>,
    filters: Signal<BookingFilters>,
    debounce: Signal<u64>,
    scope: BookingScope,
}

pub fn use_bookings(scope: BookingScope) -> BookingsHandle {
    let view = use_signal(BookingsView::new);
    let filters = use_signal(BookingFilters::new);
    let search_input = use_signal(String::new);
    let debounce = use_signal(|| 0u64);

    let handle = BookingsHandle { view, search_input, filters, debounce, scope };

    // One network call per filter change (including the initial mount).
    use_effect(move || {
        let current = filters();
        issue_fetch(view, scope, current);
    });

    handle
}

/// Issue a generation-tagged fetch; the response is applied only if it is
/// still the latest when it arrives.
fn issue_fetch(mut view: Signal<BookingsView>, scope: BookingScope, filters: BookingFilters) {
    let filters = filters.normalized();
    let generation = view.write().begin_fetch(&filters);

    spawn(async move {
        let result = match scope {
            BookingScope::Mine => api::bookings::my_bookings(filters).await,
            BookingScope::Managed => api::bookings::list_bookings(filters).await,
        };

        let mut view = view;
        match result {
            Ok(response) => {
                view.write().apply_response(generation, response);
            }
            Err(err) => {
                view.write().apply_error(generation, err.to_string());
            }
        }
    });
}

impl BookingsHandle {
    /// Re-issue the most recent request unchanged (retry affordance, and
    /// refetch after a mutation).
    pub fn refetch(&self) {
        let filters = self.view.peek().filters().clone();
        issue_fetch(self.view, self.scope, filters);
    }

    /// Switch the status tab. Resets to the first page.
    pub fn set_status(&mut self, status: Option<BookingStatus>) {
        let mut filters = self.filters.write();
        filters.status = status;
        filters.page = Some(1);
    }

    pub fn set_page(&mut self, page: i64) {
        self.filters.write().page = Some(page);
    }

    /// Update the search box. The filter (and therefore the network call)
    /// only follows after the debounce window passes with no newer
    /// keystroke.
    pub fn set_search(&mut self, term: String) {
        self.search_input.set(term.clone());

        let token = *self.debounce.peek() + 1;
        self.debounce.set(token);

        let debounce = self.debounce;
        let mut filters = self.filters;
        spawn(async move {
            sleep(SEARCH_DEBOUNCE).await;
            // A newer keystroke superseded this one while we slept.
            if *debounce.peek() != token {
                return;
            }
            let mut filters = filters.write();
            filters.search = Some(term);
            filters.page = Some(1);
        });
    }

    /// Currently applied status filter (not the raw search box).
    pub fn status_filter(&self) -> Option<BookingStatus> {
        self.filters.read().status.clone()
    }
}
