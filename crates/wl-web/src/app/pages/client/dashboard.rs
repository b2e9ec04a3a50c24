use dioxus::prelude::*;

use crate::{
    app::{auth::context::use_session, routes::CLIENT_ONLY, storage},
    components::{Layout, RequireRole},
    Routes,
};

#[component]
pub fn ClientDashboardPage() -> Element {
    rsx! {
        Layout {
            RequireRole { rule: CLIENT_ONLY,
                ClientDashboard {}
            }
        }
    }
}

#[component]
fn ClientDashboard() -> Element {
    let session = use_session();
    let full_name = session.read().full_name();
    let mut draft = use_signal(storage::booking_draft);

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Welcome back, {full_name}" }

            if let Some(current) = draft() {
                div { class: "alert alert-info mb-6",
                    span { "You have an unfinished booking for \"{current.package_title}\"." }
                    div { class: "flex gap-2",
                        Link { to: Routes::PackagesPage {}, class: "btn btn-sm btn-primary", "Continue" }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| {
                                storage::clear_booking_draft();
                                draft.set(None);
                            },
                            "Discard"
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div { class: "card bg-base-100 shadow-md",
                    div { class: "card-body",
                        h2 { class: "card-title", "My Bookings" }
                        p { "Track upcoming weddings, payments, and cancellations." }
                        div { class: "card-actions justify-end",
                            Link { to: Routes::ClientBookingsPage {}, class: "btn btn-primary btn-sm", "Open" }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-md",
                    div { class: "card-body",
                        h2 { class: "card-title", "Browse Packages" }
                        p { "Find a planner and a package for your date." }
                        div { class: "card-actions justify-end",
                            Link { to: Routes::PackagesPage {}, class: "btn btn-primary btn-sm", "Browse" }
                        }
                    }
                }
            }
        }
    }
}
