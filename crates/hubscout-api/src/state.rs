//! Shared request state.

use std::sync::Arc;

use hubscout_core::ModelSource;
use hubscout_search::SearchService;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
}

impl AppState {
    pub fn new(source: Arc<dyn ModelSource>) -> Self {
        Self {
            search: SearchService::new(source),
        }
    }
}
