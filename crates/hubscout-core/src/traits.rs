//! Core traits for hubscout abstractions.
//!
//! These traits define the narrow capability surface hubscout needs from a
//! remote model catalog, so the search core can run against the real hub or
//! an in-memory source in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RemoteModelRecord, SortDirection, SortKey};

/// Parameters for a catalog search.
///
/// Filtering and sorting are performed by the catalog, not locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubSearchParams {
    /// Residual free-text search term.
    pub search: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
    /// Task tag filter, e.g. "text-generation".
    pub task_tag: Option<String>,
    /// Library filter, e.g. "transformers".
    pub library: Option<String>,
}

/// A forward-only cursor over an unbounded sequence of catalog records.
///
/// Implementations may perform network I/O while advancing. There is no
/// way to skip ahead or ask for a total count.
#[async_trait]
pub trait ModelCursor: Send {
    /// Advance to the next record, or `None` once the sequence ends.
    async fn next_record(&mut self) -> Result<Option<RemoteModelRecord>>;
}

/// Remote model catalog.
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Start a search. No I/O happens until the cursor is first advanced.
    fn search(&self, params: HubSearchParams) -> Box<dyn ModelCursor>;

    /// Fetch one model with full file metadata and card data.
    ///
    /// Returns `Error::NotFound` when no such model exists.
    async fn model_info(&self, model_id: &str) -> Result<RemoteModelRecord>;

    /// Fetch the model's README, or `None` if the repository has none.
    async fn readme(&self, model_id: &str) -> Result<Option<String>>;

    /// Direct download URL for a file in the model repository.
    fn file_url(&self, model_id: &str, filename: &str) -> String;
}
