use dioxus::prelude::*;
use wl_types::roles::ApprovalStatus;

use crate::{
    app::{api::admin::list_planner_applications, routes::ADMIN_ONLY},
    components::{Layout, RequireRole},
    Routes,
};

#[component]
pub fn AdminDashboardPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: ADMIN_ONLY,
                AdminDashboard {}
            }
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let applications = use_resource(|| async move { list_planner_applications(None).await });

    let content = match &*applications.read_unchecked() {
        Some(Ok(applications)) => {
            let pending = applications.iter().filter(|a| a.status == ApprovalStatus::Pending).count();
            let approved = applications.iter().filter(|a| a.status == ApprovalStatus::Approved).count();
            let rejected = applications.iter().filter(|a| a.status == ApprovalStatus::Rejected).count();
            rsx! {
                div { class: "stats shadow w-full mb-6",
                    div { class: "stat",
                        div { class: "stat-title", "Pending Applications" }
                        div { class: "stat-value text-warning", "{pending}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Approved Planners" }
                        div { class: "stat-value text-success", "{approved}" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Rejected" }
                        div { class: "stat-value", "{rejected}" }
                    }
                }
                Link { to: Routes::AdminPlannersPage {}, class: "btn btn-primary",
                    "Review planner applications"
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Error loading overview: {e}" }
        },
        None => rsx! {
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
    };

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Platform Overview" }
            {content}
        }
    }
}
