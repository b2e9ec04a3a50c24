use dioxus::prelude::*;
use wl_types::roles::ApprovalStatus;

use crate::{
    app::{auth::context::use_session, routes::PLANNER_ONLY},
    components::{Layout, RequireRole},
    Routes,
};

/// Planner landing page. Reachable with any approval status; the management
/// screens behind it are the ones gated on approval.
#[component]
pub fn PlannerDashboardPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: PLANNER_ONLY,
                PlannerDashboard {}
            }
        }
    }
}

#[component]
fn PlannerDashboard() -> Element {
    let session = use_session();
    let state = session.read();
    let full_name = state.full_name();
    let approval = state.approval();

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Welcome, {full_name}" }

            match approval {
                Some(ApprovalStatus::Pending) => rsx! {
                    div { class: "alert alert-warning mb-6",
                        span { "Your planner application is pending approval. Management screens unlock once it is approved." }
                    }
                },
                Some(ApprovalStatus::Rejected) => rsx! {
                    div { class: "alert alert-error mb-6",
                        span { "Your planner application was rejected. Contact support if you believe this is a mistake." }
                    }
                },
                _ => rsx! {},
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div { class: "card bg-base-100 shadow-md",
                    div { class: "card-body",
                        h2 { class: "card-title", "Bookings" }
                        p { "Confirm, complete, or cancel client bookings." }
                        div { class: "card-actions justify-end",
                            Link { to: Routes::PlannerBookingsPage {}, class: "btn btn-primary btn-sm", "Open" }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-md",
                    div { class: "card-body",
                        h2 { class: "card-title", "Payments" }
                        p { "Review submitted receipts and verify or reject them." }
                        div { class: "card-actions justify-end",
                            Link { to: Routes::PlannerPaymentsPage {}, class: "btn btn-primary btn-sm", "Open" }
                        }
                    }
                }
            }
        }
    }
}
