use thiserror::Error;

/// Errors raised while loading [`AppConfig`](crate::AppConfig) from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Validation errors for domain values built from user input.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("unknown business category: {0}")]
    UnknownCategory(String),

    #[error("search radius must be a positive number of meters, got {0}")]
    InvalidRadius(f64),
}
