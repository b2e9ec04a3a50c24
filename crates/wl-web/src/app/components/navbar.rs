use dioxus::prelude::*;
use wl_types::roles::{nav_state, NavState};

use crate::{
    app::auth::context::use_session,
    components::{icons::LockIcon, AvatarDropDown},
};

/// Top navigation. Entries come from the role capability table; entries
/// gated on planner approval render disabled with a lock indicator rather
/// than disappearing. The disabled state is advisory — the route guard
/// enforces the same gate independently.
#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let state = session.read();
    let logged_in = state.user.is_some();
    let role = state.role();
    let approval = state.approval();

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                a { class: "btn btn-ghost text-xl", href: "/", "WedLink" }
                ul { class: "menu menu-horizontal px-1",
                    if let Some(role) = role {
                        for entry in role.capabilities().nav.iter() {
                            match nav_state(entry, role, approval) {
                                NavState::Enabled => rsx! {
                                    li { key: "{entry.path}",
                                        Link { to: entry.path, "{entry.label}" }
                                    }
                                },
                                NavState::Locked => rsx! {
                                    li {
                                        key: "{entry.path}",
                                        class: "wl-locked disabled",
                                        title: "Available once your application is approved",
                                        a {
                                            "{entry.label}"
                                            LockIcon {}
                                        }
                                    }
                                },
                            }
                        }
                    } else {
                        li { Link { to: crate::Routes::PackagesPage {}, "Packages" } }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if logged_in {
                    AvatarDropDown {}
                } else {
                    Link { to: crate::Routes::LoginPage {}, class: "btn btn-primary btn-sm", "Sign in" }
                }
            }
        }
    }
}
