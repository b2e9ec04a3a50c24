use dioxus::prelude::*;

use crate::components::{Footer, NavBar};

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "wl-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "wl-main flex-grow p-4", {
                    children
                }
            }
            Footer {}
        }
    }
}
