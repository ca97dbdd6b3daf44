//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool and `IndexerClient` wraps
//! a `reqwest::Client`, which is reference-counted internally.

use sea_orm::DatabaseConnection;

use crate::server::service::indexer::IndexerClient;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the external identity indexer. The underlying reqwest
    /// client does not follow redirects.
    pub indexer: IndexerClient,

    /// Public base URL of this deployment, used when building links.
    pub app_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, indexer: IndexerClient, app_url: String) -> Self {
        Self {
            db,
            indexer,
            app_url,
        }
    }
}
