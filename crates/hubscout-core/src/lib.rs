//! # hubscout-core
//!
//! Core types, traits, and abstractions for hubscout.
//!
//! This crate provides the domain data structures, the shared error type,
//! and the `ModelSource` / `ModelCursor` traits that the search core walks.

pub mod artifacts;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use artifacts::{has_binary_artifact, is_binary_artifact, parse_quantization};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
