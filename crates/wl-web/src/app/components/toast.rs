use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub toast_type: ToastType,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), toast_type: ToastType::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), toast_type: ToastType::Error }
    }
}

#[component]
pub fn Toast(mut message: Signal<Option<ToastMessage>>) -> Element {
    // Auto-dismiss after 5 seconds when a message is shown
    use_effect(move || {
        if message().is_some() {
            spawn(async move {
                sleep(Duration::from_secs(5)).await;
                message.set(None);
            });
        }
    });

    if let Some(toast) = message() {
        let alert_class = match toast.toast_type {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        };

        rsx! {
            div { class: "toast toast-bottom toast-end z-50",
                div {
                    class: "alert {alert_class}",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost ml-2",
                        onclick: move |_| message.set(None),
                        "✕"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
