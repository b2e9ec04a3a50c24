use dioxus::prelude::*;

use crate::app::auth::context::use_session;

#[component]
pub fn AvatarDropDown() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let state = session.read();
    let full_name = state.full_name();
    let initials = state.initials();
    let initial = if initials.is_empty() { "?".to_string() } else { initials };
    let role_badge = state.role().map(|role| {
        let caps = role.capabilities();
        (caps.label, caps.badge_class)
    });

    let on_logout = move |_| {
        navigator.push(crate::Routes::LogoutPage {});
    };

    rsx! {
        div { class: "dropdown dropdown-end pl-2",
            div {
                tabindex: "0",
                role: "button",
                class: "btn btn-ghost btn-circle avatar placeholder",
                div { class: "bg-neutral text-neutral-content rounded-full w-10",
                    span { class: "text-xl", "{initial}" }
                }
            }
            ul {
                tabindex: "-1",
                class: "menu menu-sm dropdown-content bg-base-100 rounded-box z-1 mt-3 w-52 p-2 shadow",
                li {
                    a { class: "pointer-events-none font-bold",
                        "{full_name}"
                        if let Some((label, badge_class)) = role_badge {
                            span { class: "badge badge-sm {badge_class} ml-2", "{label}" }
                        }
                    }
                }
                div { class: "divider my-0" }
                li {
                    a { onclick: on_logout, "Logout" }
                }
            }
        }
    }
}
