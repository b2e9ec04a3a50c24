use dioxus::prelude::*;
use wl_types::bookings::{Booking, BookingStatus};
use wl_types::validation::{format_errors, ReceiptInput};

use crate::{
    app::{
        api,
        hooks::{use_bookings, BookingScope, BookingsHandle},
        routes::CLIENT_ONLY,
    },
    components::{BookingStatusBadge, Layout, Modal, PaymentBadge, RequireRole, Toast, ToastMessage},
};

#[component]
pub fn ClientBookingsPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: CLIENT_ONLY,
                ClientBookings {}
            }
        }
    }
}

#[component]
fn ClientBookings() -> Element {
    let bookings = use_bookings(BookingScope::Mine);
    let mut toast = use_signal(|| None::<ToastMessage>);

    // Cancel modal state
    let mut cancel_target = use_signal(|| None::<Booking>);
    let mut cancel_reason = use_signal(String::new);
    let mut cancel_error = use_signal(|| None::<String>);
    let mut cancel_busy = use_signal(|| false);

    // Receipt modal state
    let mut receipt_target = use_signal(|| None::<Booking>);
    let mut receipt_amount = use_signal(String::new);
    let mut receipt_reference = use_signal(String::new);
    let mut receipt_error = use_signal(|| None::<String>);
    let mut receipt_busy = use_signal(|| false);

    let view = bookings.view.read();
    let loading = view.loading();
    let error = view.error().map(str::to_string);
    let groups = view.groups().cloned();
    // Section headers show the backend's filtered group sizes; the tab
    // badges above use the unfiltered aggregate instead.
    let summary = view.summary().unwrap_or_default();
    let pagination = view.pagination();
    drop(view);

    let on_cancel_confirm = move |_| {
        if cancel_busy() {
            return;
        }
        let Some(target) = cancel_target() else { return };
        cancel_error.set(None);
        cancel_busy.set(true);

        spawn(async move {
            let reason = cancel_reason();
            let reason = (!reason.trim().is_empty()).then(|| reason.trim().to_string());

            match api::bookings::cancel_booking(target.id.clone(), reason).await {
                Ok(()) => {
                    cancel_target.set(None);
                    cancel_reason.set(String::new());
                    toast.set(Some(ToastMessage::success("Booking cancelled")));
                    bookings.refetch();
                }
                Err(err) => {
                    // Write failed loudly: the modal stays open with the error.
                    cancel_error.set(Some(err.to_string()));
                }
            }
            cancel_busy.set(false);
        });
    };

    let on_receipt_submit = move |_| {
        if receipt_busy() {
            return;
        }
        let Some(target) = receipt_target() else { return };
        receipt_error.set(None);

        let amount_raw = receipt_amount();
        let reference_raw = receipt_reference();
        let input = ReceiptInput::new(&amount_raw, &reference_raw);
        let errors = input.validate();
        if !errors.is_empty() {
            // Caught locally; nothing goes on the wire.
            receipt_error.set(Some(format_errors(&errors)));
            return;
        }
        let amount = match input.parsed_amount() {
            Some(amount) => amount,
            None => return,
        };

        receipt_busy.set(true);
        spawn(async move {
            match api::payments::submit_receipt(target.id.clone(), amount, reference_raw.trim().to_string()).await {
                Ok(()) => {
                    receipt_target.set(None);
                    receipt_amount.set(String::new());
                    receipt_reference.set(String::new());
                    toast.set(Some(ToastMessage::success("Receipt submitted for review")));
                    bookings.refetch();
                }
                Err(err) => {
                    receipt_error.set(Some(err.to_string()));
                }
            }
            receipt_busy.set(false);
        });
    };

    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-3xl font-bold", "My Bookings" }
                input {
                    r#type: "search",
                    placeholder: "Search by package or venue",
                    class: "input input-bordered w-64",
                    value: "{bookings.search_input}",
                    oninput: {
                        let mut bookings = bookings;
                        move |evt: Event<FormData>| bookings.set_search(evt.value())
                    },
                }
            }

            StatusTabs { bookings }

            if let Some(error) = error {
                // Stale data stays on screen below; the error rides on top
                // with a retry affordance.
                div { class: "alert alert-error mb-4",
                    span { "Error loading bookings: {error}" }
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| bookings.refetch(),
                        "Retry"
                    }
                }
            }

            if loading && groups.is_none() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }

            if let Some(groups) = groups {
                if groups.is_empty() {
                    div { class: "alert alert-info", "No bookings match your criteria." }
                }

                BookingSection {
                    title: "Upcoming ({summary.upcoming})",
                    bookings: groups.upcoming.clone(),
                    on_cancel: move |booking: Booking| {
                        cancel_error.set(None);
                        cancel_reason.set(String::new());
                        cancel_target.set(Some(booking));
                    },
                    on_receipt: move |booking: Booking| {
                        receipt_error.set(None);
                        receipt_amount.set(String::new());
                        receipt_reference.set(String::new());
                        receipt_target.set(Some(booking));
                    },
                }
                BookingSection {
                    title: "Completed ({summary.completed})",
                    bookings: groups.completed.clone(),
                }
                BookingSection {
                    title: "Cancelled ({summary.cancelled})",
                    bookings: groups.cancelled.clone(),
                }
            }

            if let Some(pagination) = pagination {
                if pagination.total_pages > 1 {
                    div { class: "join flex justify-center mt-6",
                        button {
                            class: "join-item btn btn-sm",
                            disabled: pagination.page <= 1,
                            onclick: {
                                let mut bookings = bookings;
                                move |_| bookings.set_page(pagination.page - 1)
                            },
                            "«"
                        }
                        button { class: "join-item btn btn-sm btn-disabled",
                            "Page {pagination.page} of {pagination.total_pages}"
                        }
                        button {
                            class: "join-item btn btn-sm",
                            disabled: pagination.page >= pagination.total_pages,
                            onclick: {
                                let mut bookings = bookings;
                                move |_| bookings.set_page(pagination.page + 1)
                            },
                            "»"
                        }
                    }
                }
            }

            // Cancel confirmation
            Modal {
                open: cancel_target().is_some(),
                on_close: move |_| cancel_target.set(None),
                title: "Cancel this booking?",
                actions: rsx! {
                    button {
                        class: "btn btn-error",
                        disabled: cancel_busy(),
                        onclick: on_cancel_confirm,
                        if cancel_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Cancel booking"
                    }
                },
                div { class: "flex flex-col gap-3",
                    if let Some(target) = cancel_target() {
                        p { "\"{target.package.title}\" on {target.wedding_date}" }
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Reason (optional)",
                        value: "{cancel_reason}",
                        oninput: move |evt| cancel_reason.set(evt.value()),
                    }
                    if let Some(error) = cancel_error() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                }
            }

            // Receipt submission
            Modal {
                open: receipt_target().is_some(),
                on_close: move |_| receipt_target.set(None),
                title: "Submit payment receipt",
                actions: rsx! {
                    button {
                        class: "btn btn-primary",
                        disabled: receipt_busy(),
                        onclick: on_receipt_submit,
                        if receipt_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Submit"
                    }
                },
                div { class: "flex flex-col gap-3",
                    input {
                        r#type: "text",
                        class: "input input-bordered",
                        placeholder: "Amount paid",
                        value: "{receipt_amount}",
                        oninput: move |evt| receipt_amount.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered",
                        placeholder: "Receipt reference",
                        value: "{receipt_reference}",
                        oninput: move |evt| receipt_reference.set(evt.value()),
                    }
                    if let Some(error) = receipt_error() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                }
            }

            Toast { message: toast }
        }
    }
}

/// Status filter tabs. Badge counts come from the unfiltered aggregate so
/// they hold still while search narrows the visible list.
#[component]
fn StatusTabs(bookings: BookingsHandle) -> Element {
    let counts = bookings.view.read().status_counts();
    let active = bookings.status_filter();

    let tabs: [(Option<BookingStatus>, &str, Option<i64>); 5] = [
        (None, "All", counts.map(|c| c.total())),
        (Some(BookingStatus::Pending), "Pending", counts.map(|c| c.pending)),
        (Some(BookingStatus::Confirmed), "Confirmed", counts.map(|c| c.confirmed)),
        (Some(BookingStatus::Completed), "Completed", counts.map(|c| c.completed)),
        (Some(BookingStatus::Cancelled), "Cancelled", counts.map(|c| c.cancelled)),
    ];

    rsx! {
        div { role: "tablist", class: "tabs tabs-boxed mb-4",
            for (status, label, count) in tabs {
                a {
                    role: "tab",
                    class: if active == status { "tab tab-active" } else { "tab" },
                    onclick: {
                        let mut bookings = bookings;
                        let status = status.clone();
                        move |_| bookings.set_status(status.clone())
                    },
                    match count {
                        Some(count) => rsx! { "{label} ({count})" },
                        None => rsx! { "{label}" },
                    }
                }
            }
        }
    }
}

#[component]
fn BookingSection(
    title: String,
    bookings: Vec<Booking>,
    on_cancel: Option<EventHandler<Booking>>,
    on_receipt: Option<EventHandler<Booking>>,
) -> Element {
    if bookings.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "mb-6",
            h2 { class: "text-xl font-semibold mb-2", "{title}" }
            div { class: "flex flex-col gap-2",
                for booking in bookings {
                    BookingCard {
                        key: "{booking.id}",
                        booking: booking.clone(),
                        on_cancel,
                        on_receipt,
                    }
                }
            }
        }
    }
}

#[component]
fn BookingCard(
    booking: Booking,
    on_cancel: Option<EventHandler<Booking>>,
    on_receipt: Option<EventHandler<Booking>>,
) -> Element {
    let date = booking.wedding_date.format("%b %e, %Y").to_string();
    let can_cancel = booking.status.can_transition_to(&BookingStatus::Cancelled);
    let needs_receipt = booking.payment.is_none() && booking.status == BookingStatus::Confirmed;

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body py-4 flex-row justify-between items-center flex-wrap gap-2",
                div {
                    div { class: "font-semibold", "{booking.package.title}" }
                    div { class: "text-sm opacity-70",
                        "{date}"
                        if let Some(time) = &booking.wedding_time {
                            " at {time}"
                        }
                        if let Some(venue) = &booking.venue {
                            " at {venue}"
                        }
                    }
                    div { class: "text-sm", "${booking.package.price:.2}" }
                }
                div { class: "flex items-center gap-2",
                    BookingStatusBadge { status: booking.status.clone() }
                    PaymentBadge { payment: booking.payment.clone() }
                    if needs_receipt {
                        if let Some(on_receipt) = on_receipt {
                            button {
                                class: "btn btn-sm btn-outline",
                                onclick: {
                                    let booking = booking.clone();
                                    move |_| on_receipt.call(booking.clone())
                                },
                                "Submit receipt"
                            }
                        }
                    }
                    if can_cancel {
                        if let Some(on_cancel) = on_cancel {
                            button {
                                class: "btn btn-sm btn-ghost text-error",
                                onclick: {
                                    let booking = booking.clone();
                                    move |_| on_cancel.call(booking.clone())
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
