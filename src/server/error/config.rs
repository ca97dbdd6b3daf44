use thiserror::Error;

/// Startup configuration problems. Always fatal: the server refuses to boot
/// without a complete, valid environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),

    #[error("Environment variable '{var}' is not a valid URL: {source}")]
    InvalidUrl {
        var: String,
        #[source]
        source: url::ParseError,
    },
}
