use crate::server::{
    data::site::SiteRepository,
    error::AppError,
    model::site::{CreateSiteParam, NavigationItem, UpdateSiteParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_subdomain;
mod update;

fn sample_navigation() -> Vec<NavigationItem> {
    vec![
        NavigationItem {
            id: "nav-1".to_string(),
            label: "About".to_string(),
            url: "/about".to_string(),
        },
        NavigationItem {
            id: "nav-2".to_string(),
            label: "Archives".to_string(),
            url: "/archives".to_string(),
        },
    ]
}
