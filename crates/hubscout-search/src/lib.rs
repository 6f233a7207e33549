//! # hubscout-search
//!
//! Model search over a forward-only hub cursor.
//!
//! This crate provides:
//! - Query normalization: lifting a task keyword out of free text into a task tag
//! - Bounded-lookahead pagination over a lazily produced record sequence
//! - Model detail assembly (README, binary artifacts, card metadata)
//! - `SearchService` tying the pieces together for the HTTP layer
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hubscout_search::{SearchRequest, SearchService};
//! use hubscout_hub::HubClient;
//!
//! let service = SearchService::new(Arc::new(HubClient::from_env()?));
//!
//! let outcome = service
//!     .search(SearchRequest {
//!         query: Some("llama text generation".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // "text generation" became the task tag, "llama" was searched for.
//! assert_eq!(outcome.task_tag.as_deref(), Some("text-generation"));
//! ```

pub mod detail;
pub mod normalizer;
pub mod service;
pub mod task_keywords;
pub mod walker;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use hubscout_core::*;

// Re-export search types
pub use detail::model_detail;
pub use normalizer::{normalize, NormalizedQuery};
pub use service::{SearchOutcome, SearchRequest, SearchService};
pub use task_keywords::{matchers, task_tag_for, KeywordMatcher, TASK_KEYWORDS};
pub use walker::{fetch_page, PaginationWalker};
