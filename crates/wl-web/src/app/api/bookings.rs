// Booking server functions

use dioxus::prelude::*;
use wl_types::bookings::{BookingFilters, BookingStatus, BookingsResponse};

use crate::error::ApiError;

#[get("/api/bookings/my-bookings", headers: axum::http::HeaderMap)]
pub async fn my_bookings(filters: BookingFilters) -> Result<BookingsResponse, ApiError> {
    use crate::server::upstream;

    let filters = filters.normalized();
    upstream::get_json("/bookings/my-bookings", &filters.query_pairs(), &headers).await
}

/// Planner/admin management listing; same envelope as the client listing.
#[get("/api/bookings", headers: axum::http::HeaderMap)]
pub async fn list_bookings(filters: BookingFilters) -> Result<BookingsResponse, ApiError> {
    use crate::server::upstream;

    let filters = filters.normalized();
    upstream::get_json("/bookings", &filters.query_pairs(), &headers).await
}

#[put("/api/bookings/my-bookings/{id}/cancel", headers: axum::http::HeaderMap)]
pub async fn cancel_booking(id: String, reason: Option<String>) -> Result<(), ApiError> {
    use reqwest::Method;
    use serde::Serialize;

    use crate::server::upstream;

    #[derive(Serialize)]
    struct Body {
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    }

    let reason = reason.map(|reason| reason.trim().to_string()).filter(|reason| !reason.is_empty());
    let path = format!("/bookings/my-bookings/{}/cancel", id);
    upstream::send_unit(Method::PUT, &path, &Body { reason }, &headers).await
}

/// Planner/admin status transition (`confirm`, `complete`, `cancel`).
#[put("/api/bookings/{id}/status", headers: axum::http::HeaderMap)]
pub async fn update_booking_status(
    id: String,
    status: BookingStatus,
    notes: Option<String>,
) -> Result<(), ApiError> {
    use reqwest::Method;
    use serde::Serialize;

    use crate::server::upstream;

    #[derive(Serialize)]
    struct Body {
        status: BookingStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    }

    let path = format!("/bookings/{}/status", id);
    upstream::send_unit(Method::PUT, &path, &Body { status, notes }, &headers).await
}
