//! Unit tests for booking list reconciliation.

use chrono::NaiveDate;

use crate::bookings::*;

fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        status,
        wedding_date: NaiveDate::from_ymd_opt(2027, 6, 12).unwrap(),
        wedding_time: None,
        venue: Some("Garden Pavilion".to_string()),
        package: PackageSnapshot { title: "Classic".to_string(), price: 2400.0 },
        payment: None,
        client_name: None,
    }
}

fn response(ids: &[(&str, BookingStatus)], counts: StatusCounts) -> BookingsResponse {
    let bookings = BookingGroups::group(
        ids.iter().map(|(id, status)| booking(id, status.clone())).collect(),
    );
    let summary = bookings.local_summary();
    BookingsResponse { bookings, summary, status_counts: counts, pagination: None }
}

fn full_counts() -> StatusCounts {
    StatusCounts { pending: 3, confirmed: 2, completed: 1, cancelled: 1 }
}

#[test]
fn test_grouping_unions_pending_and_confirmed() {
    let groups = BookingGroups::group(vec![
        booking("b-1", BookingStatus::Pending),
        booking("b-2", BookingStatus::Confirmed),
        booking("b-3", BookingStatus::Completed),
        booking("b-4", BookingStatus::Cancelled),
        booking("b-5", BookingStatus::Pending),
    ]);

    let upcoming: Vec<&str> = groups.upcoming.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(upcoming, ["b-1", "b-2", "b-5"]);
    assert_eq!(groups.completed.len(), 1);
    assert_eq!(groups.cancelled.len(), 1);
    // Every booking lands in exactly one bucket.
    assert_eq!(groups.len(), 5);
}

#[test]
fn test_unknown_status_stays_visible() {
    let groups = BookingGroups::group(vec![booking("b-9", BookingStatus::Other("on_hold".to_string()))]);
    assert_eq!(groups.upcoming.len(), 1);
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_summary_matches_counts_when_unfiltered() {
    // With no status filter applied, the derived upcoming badge equals
    // pending + confirmed from the unfiltered aggregate.
    let counts = full_counts();
    assert_eq!(counts.upcoming(), 5);
    assert_eq!(counts.total(), 7);

    let groups = BookingGroups::group(vec![
        booking("b-1", BookingStatus::Pending),
        booking("b-2", BookingStatus::Pending),
        booking("b-3", BookingStatus::Pending),
        booking("b-4", BookingStatus::Confirmed),
        booking("b-5", BookingStatus::Confirmed),
        booking("b-6", BookingStatus::Completed),
        booking("b-7", BookingStatus::Cancelled),
    ]);
    let summary = groups.local_summary();
    assert_eq!(summary.upcoming, counts.pending + counts.confirmed);
    assert_eq!(summary.completed, counts.completed);
    assert_eq!(summary.cancelled, counts.cancelled);
}

#[test]
fn test_badges_come_from_the_aggregate_not_the_list() {
    let mut view = BookingsView::new();

    // A search that matches nothing still reports the full aggregate.
    let generation = view.begin_fetch(&BookingFilters::new().with_search("nomatch"));
    assert!(view.apply_response(generation, response(&[], full_counts())));

    assert_eq!(view.groups().unwrap().len(), 0);
    assert_eq!(view.summary().unwrap(), GroupSummary::default());
    assert_eq!(view.status_counts().unwrap(), full_counts());
}

#[test]
fn test_search_change_leaves_status_counts_untouched() {
    let mut view = BookingsView::new();

    let generation = view.begin_fetch(&BookingFilters::new());
    view.apply_response(
        generation,
        response(
            &[
                ("b-1", BookingStatus::Pending),
                ("b-2", BookingStatus::Confirmed),
                ("b-3", BookingStatus::Completed),
            ],
            full_counts(),
        ),
    );
    let before = view.status_counts().unwrap();

    // Narrow by search: fewer rows, same badges.
    let generation = view.begin_fetch(&BookingFilters::new().with_search("garden"));
    view.apply_response(generation, response(&[("b-1", BookingStatus::Pending)], full_counts()));

    assert_eq!(view.groups().unwrap().len(), 1);
    assert_eq!(view.status_counts().unwrap(), before);
}

#[test]
fn test_summary_and_counts_are_independent_aggregates() {
    // The backend may report a summary that does not equal any sum over
    // statusCounts (e.g. while a filter is active). Both are kept verbatim.
    let bookings = BookingGroups::group(vec![booking("b-1", BookingStatus::Pending)]);
    let reported = BookingsResponse {
        bookings,
        summary: GroupSummary { upcoming: 1, completed: 0, cancelled: 0 },
        status_counts: full_counts(),
        pagination: None,
    };

    let mut view = BookingsView::new();
    let generation = view.begin_fetch(&BookingFilters::new().with_status(BookingStatus::Pending));
    view.apply_response(generation, reported);

    assert_eq!(view.summary().unwrap().upcoming, 1);
    assert_eq!(view.status_counts().unwrap().upcoming(), 5);
}

#[test]
fn test_last_request_wins() {
    let mut view = BookingsView::new();

    let first = view.begin_fetch(&BookingFilters::new().with_search("a"));
    let second = view.begin_fetch(&BookingFilters::new().with_search("b"));

    // The faster, later request lands first.
    assert!(view.apply_response(second, response(&[("b-2", BookingStatus::Confirmed)], full_counts())));
    assert!(!view.loading());

    // The slow response for the superseded filter arrives afterwards and is
    // discarded wholesale.
    assert!(!view.apply_response(first, response(&[("b-1", BookingStatus::Pending)], full_counts())));

    let groups = view.groups().unwrap();
    assert_eq!(groups.upcoming[0].id, "b-2");
    assert_eq!(view.filters().search.as_deref(), Some("b"));
}

#[test]
fn test_stale_error_does_not_clobber_fresh_result() {
    let mut view = BookingsView::new();

    let first = view.begin_fetch(&BookingFilters::new());
    let second = view.begin_fetch(&BookingFilters::new().with_page(2));

    view.apply_response(second, response(&[("b-7", BookingStatus::Completed)], full_counts()));
    assert!(!view.apply_error(first, "request timed out"));

    assert!(view.error().is_none());
    assert!(view.has_data());
}

#[test]
fn test_failed_fetch_keeps_previous_data() {
    let mut view = BookingsView::new();

    let generation = view.begin_fetch(&BookingFilters::new());
    view.apply_response(generation, response(&[("b-1", BookingStatus::Pending)], full_counts()));

    let generation = view.begin_fetch(&BookingFilters::new().with_page(2));
    assert!(view.apply_error(generation, "upstream unreachable"));

    // Stale-but-present beats empty: the old page is still renderable
    // alongside the error and its retry affordance.
    assert_eq!(view.error(), Some("upstream unreachable"));
    assert!(view.has_data());
    assert_eq!(view.groups().unwrap().upcoming[0].id, "b-1");
    assert_eq!(view.filters().page, Some(2));
}

#[test]
fn test_loading_flag_resets_on_every_outcome() {
    let mut view = BookingsView::new();

    let generation = view.begin_fetch(&BookingFilters::new());
    assert!(view.loading());
    view.apply_response(generation, response(&[], full_counts()));
    assert!(!view.loading());

    let generation = view.begin_fetch(&BookingFilters::new());
    assert!(view.loading());
    view.apply_error(generation, "boom");
    assert!(!view.loading());
}

#[test]
fn test_filter_normalization() {
    let filters = BookingFilters::new().with_search("  roses  ").with_page(1).with_limit(10);
    let normalized = filters.normalized();
    assert_eq!(normalized.search.as_deref(), Some("roses"));

    // An all-whitespace term is dropped entirely, not sent as "".
    let filters = BookingFilters::new().with_search("   ");
    assert_eq!(filters.normalized().search, None);
    assert!(filters.query_pairs().iter().all(|(key, _)| *key != "search"));

    let pairs = BookingFilters::new()
        .with_status(BookingStatus::Pending)
        .with_search("beach")
        .with_page(2)
        .with_limit(25)
        .query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("status", "pending".to_string()),
            ("search", "beach".to_string()),
            ("page", "2".to_string()),
            ("limit", "25".to_string()),
        ]
    );
}
