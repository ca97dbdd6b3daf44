use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "site-header",
            Link {
                class: "site-header-brand",
                to: Route::Home {},
                "{SITE_NAME}"
            }
        }
    }
}
