use dioxus::prelude::*;
use wl_types::bookings::Booking;
use wl_types::payments::{PaymentInfo, PaymentStatus};
use wl_types::validation::{format_errors, RejectionInput};

use crate::{
    app::{
        api,
        hooks::{use_bookings, BookingScope},
        routes::PLANNER_APPROVED,
    },
    components::{Layout, Modal, PaymentBadge, RequireRole, Toast, ToastMessage},
};

#[component]
pub fn PlannerPaymentsPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: PLANNER_APPROVED,
                PlannerPayments {}
            }
        }
    }
}

#[component]
fn PlannerPayments() -> Element {
    let bookings = use_bookings(BookingScope::Managed);
    let mut toast = use_signal(|| None::<ToastMessage>);

    // Reject modal state
    let mut reject_target = use_signal(|| None::<(Booking, PaymentInfo)>);
    let mut reject_reason = use_signal(String::new);
    let mut reject_error = use_signal(|| None::<String>);
    let mut reject_busy = use_signal(|| false);

    let view = bookings.view.read();
    let loading = view.loading();
    let error = view.error().map(str::to_string);
    let groups = view.groups().cloned();
    drop(view);

    // Every booking that carries a payment, review-pending first.
    let mut rows: Vec<(Booking, PaymentInfo)> = groups
        .as_ref()
        .map(|groups| {
            groups
                .upcoming
                .iter()
                .chain(groups.completed.iter())
                .chain(groups.cancelled.iter())
                .filter_map(|booking| booking.payment.clone().map(|payment| (booking.clone(), payment)))
                .collect()
        })
        .unwrap_or_default();
    rows.sort_by_key(|(_, payment)| payment.status != PaymentStatus::Pending);

    let on_verify = move |(booking, payment): (Booking, PaymentInfo)| {
        spawn(async move {
            match api::payments::verify_payment(payment.id.clone()).await {
                Ok(()) => {
                    toast.set(Some(ToastMessage::success(format!(
                        "Payment for \"{}\" verified",
                        booking.package.title
                    ))));
                    bookings.refetch();
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(format!("Verify failed: {}", err))));
                }
            }
        });
    };

    let on_reject_confirm = move |_| {
        if reject_busy() {
            return;
        }
        let Some((_, payment)) = reject_target() else { return };
        reject_error.set(None);

        // A rejection always carries a reason; checked before any network
        // call.
        let reason_raw = reject_reason();
        let errors = RejectionInput::new(&reason_raw).validate();
        if !errors.is_empty() {
            reject_error.set(Some(format_errors(&errors)));
            return;
        }

        reject_busy.set(true);
        spawn(async move {
            match api::payments::reject_payment(payment.id.clone(), reason_raw.trim().to_string()).await {
                Ok(()) => {
                    reject_target.set(None);
                    reject_reason.set(String::new());
                    toast.set(Some(ToastMessage::success("Payment rejected")));
                    bookings.refetch();
                }
                Err(err) => {
                    reject_error.set(Some(err.to_string()));
                }
            }
            reject_busy.set(false);
        });
    };

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Payments" }

            if let Some(error) = error {
                div { class: "alert alert-error mb-4",
                    span { "Error loading payments: {error}" }
                    button { class: "btn btn-sm", onclick: move |_| bookings.refetch(), "Retry" }
                }
            }

            if loading && groups.is_none() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if rows.is_empty() {
                div { class: "alert alert-info", "No payments submitted yet." }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Package" }
                                th { "Amount" }
                                th { "Reference" }
                                th { "Status" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for (booking, payment) in rows {
                                tr { key: "{payment.id}",
                                    td { {booking.client_name.as_deref().unwrap_or("Unknown")} }
                                    td { "{booking.package.title}" }
                                    td { "${payment.amount:.2}" }
                                    td {
                                        span { class: "font-mono text-sm",
                                            {payment.receipt_reference.as_deref().unwrap_or("-")}
                                        }
                                    }
                                    td { PaymentBadge { payment: Some(payment.clone()) } }
                                    td { class: "text-right",
                                        if payment.status == PaymentStatus::Pending {
                                            div { class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-success",
                                                    onclick: {
                                                        let pair = (booking.clone(), payment.clone());
                                                        move |_| on_verify(pair.clone())
                                                    },
                                                    "Verify"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-ghost text-error",
                                                    onclick: {
                                                        let pair = (booking.clone(), payment.clone());
                                                        move |_| {
                                                            reject_error.set(None);
                                                            reject_reason.set(String::new());
                                                            reject_target.set(Some(pair.clone()));
                                                        }
                                                    },
                                                    "Reject"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                open: reject_target().is_some(),
                on_close: move |_| reject_target.set(None),
                title: "Reject this payment?",
                actions: rsx! {
                    button {
                        class: "btn btn-error",
                        disabled: reject_busy(),
                        onclick: on_reject_confirm,
                        if reject_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Reject payment"
                    }
                },
                div { class: "flex flex-col gap-3",
                    if let Some((booking, payment)) = reject_target() {
                        p { "${payment.amount:.2} for \"{booking.package.title}\"" }
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Reason (required)",
                        value: "{reject_reason}",
                        oninput: move |evt| reject_reason.set(evt.value()),
                    }
                    if let Some(error) = reject_error() {
                        div { class: "alert alert-error", span { "{error}" } }
                    }
                }
            }

            Toast { message: toast }
        }
    }
}
