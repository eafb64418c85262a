use thiserror::Error;

/// Errors raised by the shell around the advisors.
///
/// The advisors themselves never fail: unknown categories fall back to
/// documented defaults and numbers flow through unchecked.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
