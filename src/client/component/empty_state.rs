use dioxus::prelude::*;

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { "Nothing here yet." }
        }
    }
}
