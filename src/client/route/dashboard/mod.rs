mod pages;

pub use pages::{DashboardPages, DashboardPosts};
