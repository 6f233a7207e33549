//! Centralized default constants for hubscout.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page number (1-indexed).
pub const PAGE: u32 = 1;

/// Default number of results per page.
pub const PAGE_SIZE: u32 = 20;

/// Largest page size a client may request.
pub const PAGE_SIZE_MAX: u32 = 50;

// =============================================================================
// SEARCH
// =============================================================================

/// Sort key used when none is given or the given one is not recognized.
pub const SORT_KEY: &str = "downloads";

/// File suffix marking a quantized binary model artifact.
pub const BINARY_EXTENSION: &str = ".gguf";

/// Placeholder returned when a model has no README.
pub const README_NOT_FOUND: &str = "README not found.";

// =============================================================================
// HUB
// =============================================================================

/// Default model hub base URL.
pub const HUB_URL: &str = "https://huggingface.co";

/// Git revision used for README and file download URLs.
pub const HUB_REVISION: &str = "main";

/// Records requested per upstream HTTP page while walking search results.
pub const HUB_PAGE_LIMIT: u32 = 100;

/// Timeout for a single hub HTTP request in seconds.
pub const HUB_TIMEOUT_SECS: u64 = 30;

/// Upstream calls slower than this are logged as slow.
pub const HUB_SLOW_MS: u64 = 5_000;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Default CORS origins (React and Vite dev servers).
pub const ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Default CORS max-age in seconds (1 hour).
pub const CORS_MAX_AGE_SECS: u64 = 3600;
