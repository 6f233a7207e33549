//! Error types for hubscout.

use thiserror::Error;

/// Result type alias using hubscout's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hubscout operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The model hub call failed or returned malformed data.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A single-model lookup found no matching record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Out-of-range page or page size
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the failure originated at the model hub.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Upstream(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Upstream(format!("malformed response: {}", e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Upstream(e.to_string())
    }
}
