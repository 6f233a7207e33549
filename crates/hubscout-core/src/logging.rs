//! Structured logging field name constants for hubscout.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Upstream failure surfaced to a client as 5xx |
//! | WARN  | Recoverable issue, automatic fallback applied, slow hub call |
//! | INFO  | Lifecycle events (startup, shutdown), completed requests |
//! | DEBUG | Decision points (derived task tag, sort fallback, cursor fetches) |
//! | TRACE | Per-record iteration while walking search results |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "search", "hub"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "normalizer", "walker", "hub_client", "cursor"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch_page", "model_info", "readme"
pub const OPERATION: &str = "op";

// ─── Search fields ─────────────────────────────────────────────────────────

/// Search query text.
pub const QUERY: &str = "query";

/// Effective task tag (explicit or derived).
pub const TASK_TAG: &str = "task_tag";

/// Requested page number.
pub const PAGE: &str = "page";

/// Requested page size.
pub const PAGE_SIZE: &str = "page_size";

/// Number of upstream records read while walking, including the lookahead.
pub const SCANNED: &str = "scanned";

/// Whether another page exists.
pub const HAS_MORE: &str = "has_more";

/// Hub model identifier.
pub const MODEL_ID: &str = "model_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned.
pub const RESULT_COUNT: &str = "result_count";

/// HTTP status returned by the hub.
pub const STATUS: &str = "status";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";

/// Every field name above.
pub const ALL_FIELDS: &[&str] = &[
    REQUEST_ID,
    SUBSYSTEM,
    COMPONENT,
    OPERATION,
    QUERY,
    TASK_TAG,
    PAGE,
    PAGE_SIZE,
    SCANNED,
    HAS_MORE,
    MODEL_ID,
    DURATION_MS,
    RESULT_COUNT,
    STATUS,
    ERROR_MSG,
    SLOW,
];
