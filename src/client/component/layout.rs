use dioxus::prelude::*;

use crate::client::component::Header;
use crate::client::router::Route;

#[component]
pub fn Layout() -> Element {
    rsx! {
        Header {}
        main {
            class: "layout-main",
            Outlet::<Route> {}
        }
    }
}
