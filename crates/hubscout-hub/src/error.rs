//! Hub HTTP status handling.

use hubscout_core::Error;

/// Longest response body excerpt carried in an error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Classification of a non-success hub response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubErrorCode {
    /// Missing or invalid credentials. The hub also answers 401 for
    /// repositories that do not exist when the caller is anonymous.
    Unauthorized,
    /// Repository or file not found.
    NotFound,
    /// Rate limit exceeded.
    RateLimited,
    /// Hub-side failure.
    ServerError,
    /// Anything else.
    Unknown,
}

impl HubErrorCode {
    /// Determine the error code from an HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Returns true if, for a single-model lookup, this means "no such model".
    pub fn is_missing_model(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::NotFound)
    }
}

/// Error for a failed search page request.
pub fn search_error(status: u16, body: &str) -> Error {
    Error::Upstream(format!(
        "model search returned {}: {}",
        status,
        excerpt(body)
    ))
}

/// Error for a failed single-model request.
pub fn lookup_error(status: u16, model_id: &str, body: &str) -> Error {
    if HubErrorCode::from_status(status).is_missing_model() {
        return Error::NotFound(format!("Model '{}' not found", model_id));
    }
    Error::Upstream(format!(
        "model lookup for '{}' returned {}: {}",
        model_id,
        status,
        excerpt(body)
    ))
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        return body.to_string();
    }
    let cut: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    format!("{}...", cut)
}
