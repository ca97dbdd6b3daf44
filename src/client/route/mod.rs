pub mod dashboard;
pub mod home;
pub mod site;

pub use dashboard::{DashboardPages, DashboardPosts};
pub use home::Home;
pub use site::{SiteHome, SitePost};

use dioxus::prelude::*;

use crate::client::component::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page {
            class: "page-centered",
            div {
                h2 { "404" }
                p { "There's no page at /{path}." }
            }
        }
    }
}
