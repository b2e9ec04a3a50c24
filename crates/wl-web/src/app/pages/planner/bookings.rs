use dioxus::prelude::*;
use wl_types::bookings::{Booking, BookingStatus};

use crate::{
    app::{
        api,
        hooks::{use_bookings, BookingScope},
        routes::PLANNER_APPROVED,
    },
    components::{BookingStatusBadge, Layout, Modal, PaymentBadge, RequireRole, Toast, ToastMessage},
};

#[component]
pub fn PlannerBookingsPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: PLANNER_APPROVED,
                PlannerBookings {}
            }
        }
    }
}

#[component]
fn PlannerBookings() -> Element {
    let bookings = use_bookings(BookingScope::Managed);
    let mut toast = use_signal(|| None::<ToastMessage>);

    // Status transition modal state
    let mut transition_target = use_signal(|| None::<(Booking, BookingStatus)>);
    let mut transition_notes = use_signal(String::new);
    let mut transition_error = use_signal(|| None::<String>);
    let mut transition_busy = use_signal(|| false);

    let view = bookings.view.read();
    let loading = view.loading();
    let error = view.error().map(str::to_string);
    let groups = view.groups().cloned();
    drop(view);

    let on_transition_confirm = move |_| {
        if transition_busy() {
            return;
        }
        let Some((target, next)) = transition_target() else { return };
        transition_error.set(None);
        transition_busy.set(true);

        spawn(async move {
            let notes = transition_notes();
            let notes = (!notes.trim().is_empty()).then(|| notes.trim().to_string());

            match api::bookings::update_booking_status(target.id.clone(), next.clone(), notes).await {
                Ok(()) => {
                    transition_target.set(None);
                    transition_notes.set(String::new());
                    toast.set(Some(ToastMessage::success(format!("Booking marked {}", next.label()))));
                    bookings.refetch();
                }
                Err(err) => {
                    // Write failed loudly: the modal stays open with the error.
                    transition_error.set(Some(err.to_string()));
                }
            }
            transition_busy.set(false);
        });
    };

    let all_rows: Vec<Booking> = groups
        .as_ref()
        .map(|groups| {
            groups
                .upcoming
                .iter()
                .chain(groups.completed.iter())
                .chain(groups.cancelled.iter())
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-3xl font-bold", "Bookings" }
                input {
                    r#type: "search",
                    placeholder: "Search by client or package",
                    class: "input input-bordered w-64",
                    value: "{bookings.search_input}",
                    oninput: {
                        let mut bookings = bookings;
                        move |evt: Event<FormData>| bookings.set_search(evt.value())
                    },
                }
            }

            if let Some(error) = error {
                div { class: "alert alert-error mb-4",
                    span { "Error loading bookings: {error}" }
                    button { class: "btn btn-sm", onclick: move |_| bookings.refetch(), "Retry" }
                }
            }

            if loading && groups.is_none() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if all_rows.is_empty() {
                div { class: "alert alert-info", "No bookings found matching your criteria." }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Package" }
                                th { "Date" }
                                th { "Status" }
                                th { "Payment" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for booking in all_rows {
                                BookingRow {
                                    key: "{booking.id}",
                                    booking: booking.clone(),
                                    on_transition: move |pair| {
                                        transition_error.set(None);
                                        transition_notes.set(String::new());
                                        transition_target.set(Some(pair));
                                    },
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                open: transition_target().is_some(),
                on_close: move |_| transition_target.set(None),
                title: transition_title(transition_target().map(|(_, next)| next)),
                actions: rsx! {
                    button {
                        class: "btn btn-primary",
                        disabled: transition_busy(),
                        onclick: on_transition_confirm,
                        if transition_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Confirm"
                    }
                },
                div { class: "flex flex-col gap-3",
                    if let Some((target, _)) = transition_target() {
                        p {
                            "\"{target.package.title}\""
                            if let Some(client) = &target.client_name {
                                " for {client}"
                            }
                            " on {target.wedding_date}"
                        }
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Notes (optional)",
                        value: "{transition_notes}",
                        oninput: move |evt| transition_notes.set(evt.value()),
                    }
                    if let Some(error) = transition_error() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                }
            }

            Toast { message: toast }
        }
    }
}

fn transition_title(next: Option<BookingStatus>) -> String {
    match next {
        Some(status) => format!("Mark booking as {}?", status.label().to_lowercase()),
        None => String::new(),
    }
}

#[component]
fn BookingRow(booking: Booking, on_transition: EventHandler<(Booking, BookingStatus)>) -> Element {
    let date = booking.wedding_date.format("%b %e, %Y").to_string();

    // Action buttons follow the legal transitions for the current status;
    // unknown statuses get none.
    let next_states = booking.status.transitions();

    rsx! {
        tr {
            td { {booking.client_name.as_deref().unwrap_or("Unknown")} }
            td { "{booking.package.title}" }
            td { "{date}" }
            td { BookingStatusBadge { status: booking.status.clone() } }
            td { PaymentBadge { payment: booking.payment.clone() } }
            td { class: "text-right",
                div { class: "flex gap-2 justify-end",
                    for next in next_states {
                        button {
                            key: "{next}",
                            class: transition_button_class(next),
                            onclick: {
                                let booking = booking.clone();
                                let next = next.clone();
                                move |_| on_transition.call((booking.clone(), next.clone()))
                            },
                            {transition_verb(next)}
                        }
                    }
                }
            }
        }
    }
}

fn transition_button_class(next: &BookingStatus) -> &'static str {
    match next {
        BookingStatus::Cancelled => "btn btn-sm btn-ghost text-error",
        _ => "btn btn-sm btn-outline",
    }
}

fn transition_verb(next: &BookingStatus) -> &'static str {
    match next {
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Completed => "Complete",
        BookingStatus::Cancelled => "Cancel",
        _ => "Update",
    }
}
