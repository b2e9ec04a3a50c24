use dioxus::prelude::*;
use wl_types::packages::{BookingDraft, PackageInfo};
use wl_types::roles::UserRole;

use crate::{
    app::{api::packages::list_packages, auth::hooks::use_role, storage},
    components::{Layout, Toast, ToastMessage},
    Routes,
};

#[component]
pub fn PackagesPage() -> Element {
    let mut search = use_signal(String::new);
    let mut toast = use_signal(|| None::<ToastMessage>);

    let packages_resource = use_resource(move || {
        let term = search();
        async move {
            let term = if term.trim().is_empty() { None } else { Some(term) };
            list_packages(term).await
        }
    });

    rsx! {
        Layout {
            div { class: "container mx-auto p-6",
                div { class: "flex justify-between items-center mb-6",
                    h1 { class: "text-3xl font-bold", "Wedding Packages" }
                    input {
                        r#type: "search",
                        placeholder: "Search packages",
                        class: "input input-bordered w-64",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                }

                match &*packages_resource.read_unchecked() {
                    Some(Ok(packages)) => rsx! {
                        if packages.is_empty() {
                            div { class: "alert alert-info", "No packages match your search." }
                        } else {
                            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                                for package in packages.iter() {
                                    PackageCard { package: package.clone(), toast }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "alert alert-error", "Error loading packages: {e}" }
                    },
                    None => rsx! {
                        div { class: "flex justify-center p-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    }
                }

                Toast { message: toast }
            }
        }
    }
}

#[component]
fn PackageCard(package: PackageInfo, toast: Signal<Option<ToastMessage>>) -> Element {
    let role = use_role();
    let navigator = use_navigator();

    let on_start = {
        let package = package.clone();
        move |_| {
            match role {
                Some(UserRole::Client) => {
                    storage::stage_booking_draft(&BookingDraft {
                        package_id: package.id.clone(),
                        package_title: package.title.clone(),
                    });
                    toast.set(Some(ToastMessage::success(format!(
                        "Draft saved for \"{}\" — finish it from your dashboard",
                        package.title
                    ))));
                }
                Some(_) => {
                    toast.set(Some(ToastMessage::error("Only clients can book packages")));
                }
                None => {
                    navigator.push(Routes::LoginPage {});
                }
            };
        }
    };

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body",
                h2 { class: "card-title", "{package.title}" }
                if let Some(planner) = &package.planner_name {
                    p { class: "text-sm opacity-70", "by {planner}" }
                }
                if let Some(description) = &package.description {
                    p { "{description}" }
                }
                div { class: "card-actions justify-between items-center mt-2",
                    span { class: "text-lg font-semibold", "${package.price:.2}" }
                    button { class: "btn btn-primary btn-sm", onclick: on_start, "Start booking" }
                }
            }
        }
    }
}
