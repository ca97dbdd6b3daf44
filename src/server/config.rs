use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Default indexer endpoint used when `INDEXER_URL` is not set.
const DEFAULT_INDEXER_URL: &str = "https://indexer.quill.network/v1/";

pub struct Config {
    pub database_url: String,

    /// Public base URL of this deployment, used when building links.
    pub app_url: Url,
    /// Base URL of the external identity indexer.
    pub indexer_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_url = std::env::var("APP_URL")
            .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?;
        let app_url = Url::parse(&app_url).map_err(|source| ConfigError::InvalidUrl {
            var: "APP_URL".to_string(),
            source,
        })?;

        let indexer_url =
            std::env::var("INDEXER_URL").unwrap_or_else(|_| DEFAULT_INDEXER_URL.to_string());
        let indexer_url = Url::parse(&indexer_url).map_err(|source| ConfigError::InvalidUrl {
            var: "INDEXER_URL".to_string(),
            source,
        })?;

        Ok(Self {
            database_url,
            app_url,
            indexer_url,
        })
    }
}
