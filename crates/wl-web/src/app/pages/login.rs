use dioxus::prelude::*;
use wl_types::auth::LoginRequest;
use wl_types::roles::dashboard_path;

use crate::{
    app::auth::context::{sign_in, use_session},
    components::Layout,
};

#[component]
pub fn LoginPage() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut local_error = use_signal(|| None::<String>);

    // Redirect away from login if already authenticated
    use_effect(move || {
        let state = session.read();
        if !state.loading && state.user.is_some() {
            navigator.push(dashboard_path(state.role()));
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        local_error.set(None);

        let email_val = email();
        let password_val = password();

        if email_val.trim().is_empty() {
            local_error.set(Some("Email is required".to_string()));
            return;
        }

        if password_val.is_empty() {
            local_error.set(Some("Password is required".to_string()));
            return;
        }

        submitting.set(true);

        spawn(async move {
            let request = LoginRequest {
                email: email_val.trim().to_string(),
                password: password_val,
            };

            if let Some(target) = sign_in(session, request).await {
                navigator.push(target.as_str());
            }

            submitting.set(false);
        });
    };

    // Credential rejections and server-contract failures both surface here,
    // with their distinct messages.
    let store_error = session.read().error.clone();
    let error_message = local_error().or(store_error);

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Sign in to WedLink" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "you@example.com",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "email",
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
                                }
                            }

                            if let Some(error) = error_message {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Signing in" }
                                    } else {
                                        span { "Sign in" }
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
