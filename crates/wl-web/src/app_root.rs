use dioxus::prelude::*;

use crate::app::{self, auth::context::use_session_provider};

/// Root shell: wraps the router and global providers.
#[component]
pub fn app_root() -> Element {
    // Session provider installs the context and restores any existing
    // session on mount.
    use_session_provider();

    rsx! {
        document::Title { "WedLink" }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        app::routes::AppRouter {}
    }
}
