use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    DashboardPages, DashboardPosts, Home, NotFound, SiteHome, SitePost,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/site/:site")]
    SiteHome { site: String },

    #[route("/site/:site/:page")]
    SitePost { site: String, page: String },

    #[route("/dashboard/:subdomain/pages")]
    DashboardPages { subdomain: String },

    #[route("/dashboard/:subdomain/posts")]
    DashboardPosts { subdomain: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
