//! In-memory model source for deterministic testing.
//!
//! Serves a fixed list of records in order, counts how many records the
//! cursor handed out, remembers the last search parameters, and can inject
//! an upstream failure at a given record index.
//!
//! ## Usage
//!
//! ```ignore
//! use hubscout_search::mock::MockModelSource;
//!
//! let source = MockModelSource::with_models(25).fail_after(20);
//! assert_eq!(source.records_read(), 0);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use hubscout_core::{
    Error, HubSearchParams, ModelCursor, ModelSource, RemoteModelRecord, Result,
};

/// Mock model source for testing.
#[derive(Clone)]
pub struct MockModelSource {
    records: Arc<Vec<RemoteModelRecord>>,
    readmes: HashMap<String, String>,
    fail_after: Option<usize>,
    records_read: Arc<AtomicUsize>,
    last_params: Arc<Mutex<Option<HubSearchParams>>>,
}

impl MockModelSource {
    /// Serve exactly `records`, in order, for every search.
    pub fn new(records: Vec<RemoteModelRecord>) -> Self {
        Self {
            records: Arc::new(records),
            readmes: HashMap::new(),
            fail_after: None,
            records_read: Arc::new(AtomicUsize::new(0)),
            last_params: Arc::new(Mutex::new(None)),
        }
    }

    /// Serve `n` generated records `org/model-0 .. org/model-{n-1}`.
    pub fn with_models(n: usize) -> Self {
        Self::new(Self::generate_records(n))
    }

    /// Generate `n` records sorted by descending downloads.
    pub fn generate_records(n: usize) -> Vec<RemoteModelRecord> {
        (0..n)
            .map(|i| RemoteModelRecord {
                id: format!("org/model-{}", i),
                author: Some("org".to_string()),
                likes: (n - i) as u64,
                downloads: ((n - i) * 10) as u64,
                tags: vec![JsonValue::String("text-generation".to_string())],
                pipeline_tag: Some("text-generation".to_string()),
                ..Default::default()
            })
            .collect()
    }

    /// Fail with an upstream error when the cursor reaches record `index`.
    ///
    /// `fail_after(0)` also makes detail lookups fail.
    pub fn fail_after(mut self, index: usize) -> Self {
        self.fail_after = Some(index);
        self
    }

    /// Serve `content` as the README of `model_id`.
    pub fn with_readme(mut self, model_id: impl Into<String>, content: impl Into<String>) -> Self {
        self.readmes.insert(model_id.into(), content.into());
        self
    }

    /// Total number of records handed out by all cursors so far.
    pub fn records_read(&self) -> usize {
        self.records_read.load(Ordering::SeqCst)
    }

    /// Parameters of the most recent search.
    pub fn last_params(&self) -> Option<HubSearchParams> {
        self.last_params.lock().ok().and_then(|p| p.clone())
    }

    fn fails_everything(&self) -> bool {
        self.fail_after == Some(0)
    }
}

struct MockCursor {
    records: Arc<Vec<RemoteModelRecord>>,
    position: usize,
    fail_after: Option<usize>,
    records_read: Arc<AtomicUsize>,
}

#[async_trait]
impl ModelCursor for MockCursor {
    async fn next_record(&mut self) -> Result<Option<RemoteModelRecord>> {
        if self.fail_after == Some(self.position) {
            return Err(Error::Upstream(format!(
                "injected failure at record {}",
                self.position
            )));
        }
        let Some(record) = self.records.get(self.position) else {
            return Ok(None);
        };
        self.position += 1;
        self.records_read.fetch_add(1, Ordering::SeqCst);
        Ok(Some(record.clone()))
    }
}

#[async_trait]
impl ModelSource for MockModelSource {
    fn search(&self, params: HubSearchParams) -> Box<dyn ModelCursor> {
        if let Ok(mut last) = self.last_params.lock() {
            *last = Some(params);
        }
        Box::new(MockCursor {
            records: Arc::clone(&self.records),
            position: 0,
            fail_after: self.fail_after,
            records_read: Arc::clone(&self.records_read),
        })
    }

    async fn model_info(&self, model_id: &str) -> Result<RemoteModelRecord> {
        if self.fails_everything() {
            return Err(Error::Upstream("injected failure".to_string()));
        }
        self.records
            .iter()
            .find(|r| r.id == model_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Model '{}' not found", model_id)))
    }

    async fn readme(&self, model_id: &str) -> Result<Option<String>> {
        if self.fails_everything() {
            return Err(Error::Upstream("injected failure".to_string()));
        }
        Ok(self.readmes.get(model_id).cloned())
    }

    fn file_url(&self, model_id: &str, filename: &str) -> String {
        format!("https://hub.test/{}/resolve/main/{}", model_id, filename)
    }
}
