use dioxus::prelude::*;
use wl_types::auth::PlannerApplication;
use wl_types::roles::ApprovalStatus;
use wl_types::validation::{format_errors, RejectionInput};

use crate::{
    app::{api, routes::ADMIN_ONLY},
    components::{Layout, Modal, RequireRole, Toast, ToastMessage},
};

#[component]
pub fn AdminPlannersPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: ADMIN_ONLY,
                AdminPlanners {}
            }
        }
    }
}

#[component]
fn AdminPlanners() -> Element {
    let mut status_filter = use_signal(|| Some(ApprovalStatus::Pending));
    let mut toast = use_signal(|| None::<ToastMessage>);

    let mut applications = use_resource(move || {
        let status = status_filter();
        async move { api::admin::list_planner_applications(status).await }
    });

    // Approve modal state
    let mut approve_target = use_signal(|| None::<PlannerApplication>);
    let mut approve_error = use_signal(|| None::<String>);
    let mut approve_busy = use_signal(|| false);

    // Reject modal state
    let mut reject_target = use_signal(|| None::<PlannerApplication>);
    let mut reject_reason = use_signal(String::new);
    let mut reject_error = use_signal(|| None::<String>);
    let mut reject_busy = use_signal(|| false);

    let on_approve_confirm = move |_| {
        if approve_busy() {
            return;
        }
        let Some(target) = approve_target() else { return };
        approve_error.set(None);
        approve_busy.set(true);

        spawn(async move {
            match api::admin::set_planner_approval(target.id.clone(), ApprovalStatus::Approved, None).await {
                Ok(()) => {
                    approve_target.set(None);
                    toast.set(Some(ToastMessage::success(format!("{} approved", target.owner_name))));
                    applications.restart();
                }
                Err(err) => {
                    approve_error.set(Some(err.to_string()));
                }
            }
            approve_busy.set(false);
        });
    };

    let on_reject_confirm = move |_| {
        if reject_busy() {
            return;
        }
        let Some(target) = reject_target() else { return };
        reject_error.set(None);

        // Rejections require a reason; validated before any network call.
        let reason_raw = reject_reason();
        let errors = RejectionInput::new(&reason_raw).validate();
        if !errors.is_empty() {
            reject_error.set(Some(format_errors(&errors)));
            return;
        }

        reject_busy.set(true);
        spawn(async move {
            match api::admin::set_planner_approval(
                target.id.clone(),
                ApprovalStatus::Rejected,
                Some(reason_raw.trim().to_string()),
            )
            .await
            {
                Ok(()) => {
                    reject_target.set(None);
                    reject_reason.set(String::new());
                    toast.set(Some(ToastMessage::success(format!("{} rejected", target.owner_name))));
                    applications.restart();
                }
                Err(err) => {
                    reject_error.set(Some(err.to_string()));
                }
            }
            reject_busy.set(false);
        });
    };

    let tabs: [(Option<ApprovalStatus>, &str); 4] = [
        (Some(ApprovalStatus::Pending), "Pending"),
        (Some(ApprovalStatus::Approved), "Approved"),
        (Some(ApprovalStatus::Rejected), "Rejected"),
        (None, "All"),
    ];

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Planner Approvals" }

            div { role: "tablist", class: "tabs tabs-boxed mb-4",
                for (status, label) in tabs {
                    a {
                        role: "tab",
                        class: if status_filter() == status { "tab tab-active" } else { "tab" },
                        onclick: move |_| status_filter.set(status),
                        "{label}"
                    }
                }
            }

            match &*applications.read_unchecked() {
                Some(Ok(rows)) => rsx! {
                    if rows.is_empty() {
                        div { class: "alert alert-info", "No applications in this state." }
                    } else {
                        div { class: "overflow-x-auto",
                            table { class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Owner" }
                                        th { "Business" }
                                        th { "Email" }
                                        th { "Applied" }
                                        th { "Status" }
                                        th { class: "text-right", "Actions" }
                                    }
                                }
                                tbody {
                                    for application in rows.iter() {
                                        ApplicationRow {
                                            key: "{application.id}",
                                            application: application.clone(),
                                            on_approve: move |application| {
                                                approve_error.set(None);
                                                approve_target.set(Some(application));
                                            },
                                            on_reject: move |application| {
                                                reject_error.set(None);
                                                reject_reason.set(String::new());
                                                reject_target.set(Some(application));
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "alert alert-error", "Error loading applications: {e}" }
                },
                None => rsx! {
                    div { class: "flex justify-center p-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }
            }

            Modal {
                open: approve_target().is_some(),
                on_close: move |_| approve_target.set(None),
                title: "Approve this planner?",
                actions: rsx! {
                    button {
                        class: "btn btn-success",
                        disabled: approve_busy(),
                        onclick: on_approve_confirm,
                        if approve_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Approve"
                    }
                },
                div {
                    if let Some(target) = approve_target() {
                        p {
                            "{target.owner_name}"
                            if let Some(business) = &target.business_name {
                                " ({business})"
                            }
                            " will gain access to all planner management screens."
                        }
                    }
                    if let Some(error) = approve_error() {
                        div { class: "alert alert-error mt-3", span { "{error}" } }
                    }
                }
            }

            Modal {
                open: reject_target().is_some(),
                on_close: move |_| reject_target.set(None),
                title: "Reject this application?",
                actions: rsx! {
                    button {
                        class: "btn btn-error",
                        disabled: reject_busy(),
                        onclick: on_reject_confirm,
                        if reject_busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Reject"
                    }
                },
                div { class: "flex flex-col gap-3",
                    if let Some(target) = reject_target() {
                        p { "{target.owner_name} will be notified with your reason." }
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

#[component]
fn ApplicationRow(
    application: PlannerApplication,
    on_approve: EventHandler<PlannerApplication>,
    on_reject: EventHandler<PlannerApplication>,
) -> Element {
    let applied = application
        .applied_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let status_class = match application.status {
        ApprovalStatus::Pending => "badge badge-warning",
        ApprovalStatus::Approved => "badge badge-success",
        ApprovalStatus::Rejected => "badge badge-error",
    };

    rsx! {
        tr {
            td { "{application.owner_name}" }
            td { {application.business_name.as_deref().unwrap_or("-")} }
            td { "{application.email}" }
            td { "{applied}" }
            td { span { class: "{status_class}", "{application.status}" } }
            td { class: "text-right",
                if application.status == ApprovalStatus::Pending {
                    div { class: "flex gap-2 justify-end",
                        button {
                            class: "btn btn-sm btn-success",
                            onclick: {
                                let application = application.clone();
                                move |_| on_approve.call(application.clone())
                            },
                            "Approve"
                        }
                        button {
                            class: "btn btn-sm btn-ghost text-error",
                            onclick: {
                                let application = application.clone();
                                move |_| on_reject.call(application.clone())
                            },
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}
