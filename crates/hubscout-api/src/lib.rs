//! # hubscout-api
//!
//! HTTP server exposing model search and model detail over the hub.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::{parse_allowed_origins, ServerConfig};
pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use state::AppState;
