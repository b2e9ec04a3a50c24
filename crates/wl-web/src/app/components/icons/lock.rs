use dioxus::prelude::*;

#[component]
pub fn LockIcon() -> Element {
    rsx! {
        svg {
            class: "w-3 h-3 inline-block",
            view_box: "0 0 20 20",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                d: "M10 1a4.5 4.5 0 00-4.5 4.5V9H5a2 2 0 00-2 2v6a2 2 0 002 2h10a2 2 0 002-2v-6a2 2 0 00-2-2h-.5V5.5A4.5 4.5 0 0010 1zm3 8V5.5a3 3 0 10-6 0V9h6z",
                clip_rule: "evenodd"
            }
        }
    }
}
