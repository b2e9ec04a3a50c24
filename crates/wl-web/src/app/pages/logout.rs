use dioxus::prelude::*;

use crate::{
    app::auth::context::{sign_out, use_session},
    components::Layout,
};

/// Logout is fail-open on the network call and fail-closed on local state:
/// the session and staged draft are cleared and the redirect happens even
/// when the server cannot be reached.
#[component]
pub fn LogoutPage() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let started = use_signal(|| false);

    {
        let mut started_signal = started;
        use_effect(move || {
            if started_signal() {
                return;
            }
            started_signal.set(true);

            spawn(async move {
                // Redirect target is computed from the role held before the
                // session is cleared; sign_out handles the rest.
                let target = sign_out(session).await;
                navigator.push(target);
            });
        });
    }

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body text-center space-y-4",
                        h2 { class: "card-title justify-center", "Logging out" }
                        span { class: "loading loading-spinner loading-lg mx-auto" }
                        p { "Signing you out..." }
                    }
                }
            }
        }
    }
}
