use dioxus::prelude::*;

use crate::{app::auth::context::use_session, components::Layout, Routes};

#[component]
pub fn HomePage() -> Element {
    let session = use_session();
    let state = session.read();

    rsx! {
        Layout {
            div { class: "hero min-h-[60vh] bg-base-200 rounded-box",
                div { class: "hero-content text-center",
                    div { class: "max-w-md",
                        h1 { class: "text-5xl font-bold", "Plan the day. Book the rest." }
                        p { class: "py-6",
                            "Browse wedding packages from local planners, book the one that fits, and track every payment in one place."
                        }
                        div { class: "flex gap-2 justify-center",
                            Link { to: Routes::PackagesPage {}, class: "btn btn-primary", "Browse Packages" }
                            if state.user.is_none() {
                                Link { to: Routes::LoginPage {}, class: "btn btn-ghost", "Sign in" }
                            }
                        }
                    }
                }
            }
        }
    }
}
