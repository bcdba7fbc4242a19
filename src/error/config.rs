use thiserror::Error;

/// Configuration errors raised while reading environment variables at
/// startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
