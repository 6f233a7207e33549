//! Hub client configuration.

use hubscout_core::defaults;

/// Configuration for the model hub client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Base URL of the hub, without trailing slash.
    pub base_url: String,
    /// Bearer token for private or gated models (optional).
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Records requested per upstream HTTP page while walking a search.
    pub page_limit: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::HUB_URL.to_string(),
            token: None,
            timeout_seconds: defaults::HUB_TIMEOUT_SECS,
            page_limit: defaults::HUB_PAGE_LIMIT,
        }
    }
}

impl HubConfig {
    /// Read configuration from the environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HUB_BASE_URL` | `https://huggingface.co` |
    /// | `HF_TOKEN` / `HUGGING_FACE_HUB_TOKEN` | none |
    /// | `HUB_TIMEOUT_SECS` | 30 |
    /// | `HUB_PAGE_LIMIT` | 100 |
    pub fn from_env() -> Self {
        let token = std::env::var("HF_TOKEN")
            .or_else(|_| std::env::var("HUGGING_FACE_HUB_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            base_url: std::env::var("HUB_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| defaults::HUB_URL.to_string()),
            token,
            timeout_seconds: std::env::var("HUB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::HUB_TIMEOUT_SECS),
            page_limit: std::env::var("HUB_PAGE_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(defaults::HUB_PAGE_LIMIT),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the upstream page size.
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
