use dioxus::prelude::*;
use wl_types::bookings::BookingStatus;
use wl_types::payments::{payment_label, PaymentInfo, PaymentStatus};

/// Badge for a booking status. Unrecognized statuses get the neutral style
/// rather than borrowing a recognized one.
#[component]
pub fn BookingStatusBadge(status: BookingStatus) -> Element {
    let badge_class = match &status {
        BookingStatus::Pending => "badge-warning",
        BookingStatus::Confirmed => "badge-info",
        BookingStatus::Completed => "badge-success",
        BookingStatus::Cancelled => "badge-error",
        BookingStatus::Other(_) => "badge-ghost",
    };

    rsx! {
        span { class: "badge {badge_class}", "{status.label()}" }
    }
}

/// Badge for a booking's payment. Absence renders an explicit "No Payment";
/// unknown statuses stay neutral.
#[component]
pub fn PaymentBadge(payment: Option<PaymentInfo>) -> Element {
    let badge_class = match payment.as_ref().map(|p| &p.status) {
        None => "badge-ghost",
        Some(PaymentStatus::Pending) => "badge-warning",
        Some(PaymentStatus::Verified) => "badge-success",
        Some(PaymentStatus::Rejected) => "badge-error",
        Some(PaymentStatus::Other(_)) => "badge-ghost",
    };
    let label = payment_label(payment.as_ref());

    rsx! {
        span { class: "badge {badge_class}", "{label}" }
    }
}
