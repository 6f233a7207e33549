//! Cursor pagination over the hub's forward-only search stream.
//!
//! The hub has no offset/limit or total-count API for search, only a lazy
//! sequence of records. A page is materialized by counting records from the
//! start of the sequence, and "is there another page" is answered by reading
//! exactly one record past the end of the requested page, where the walk
//! stops.
//!
//! Upstream work is therefore `O(page * page_size)`: deep pages are linearly
//! more expensive, which is inherent to a forward-only cursor.

use std::time::Instant;

use tracing::{debug, instrument, trace, warn};

use hubscout_core::defaults::HUB_SLOW_MS;
use hubscout_core::{HubSearchParams, ModelSource, ModelSummary, Page, Result, SearchQuery};

/// Walks a `ModelSource` search cursor to materialize one page.
pub struct PaginationWalker<'a> {
    source: &'a dyn ModelSource,
}

impl<'a> PaginationWalker<'a> {
    pub fn new(source: &'a dyn ModelSource) -> Self {
        Self { source }
    }

    /// Materialize the requested page and determine whether another follows.
    ///
    /// Records before the page are skipped without conversion. The first
    /// record past the page sets `has_more` and is discarded. Any upstream
    /// error aborts the walk and is returned as is; an empty page with
    /// `has_more == false` only ever means the filter matched nothing here.
    #[instrument(skip(self, query), fields(
        subsystem = "search",
        component = "walker",
        op = "fetch_page",
        query = query.term().unwrap_or(""),
        task_tag = query.task_tag().unwrap_or(""),
        page = query.page(),
        page_size = query.page_size(),
    ))]
    pub async fn fetch_page(&self, query: &SearchQuery) -> Result<Page> {
        let started = Instant::now();
        let start = query.start();
        let end = query.end();

        let mut cursor = self.source.search(HubSearchParams {
            search: query.term().map(str::to_string),
            sort: query.sort(),
            task_tag: query.task_tag().map(str::to_string),
            library: query.library().map(str::to_string),
            ..Default::default()
        });

        let mut results = Vec::with_capacity(query.page_size() as usize);
        let mut has_more = false;
        let mut i = 0usize;

        while let Some(record) = cursor.next_record().await? {
            if i >= end {
                // Lookahead record: proves another page exists, never returned.
                trace!(index = i, id = %record.id, "Lookahead record past page end");
                has_more = true;
                break;
            }
            if i >= start {
                trace!(index = i, id = %record.id, "Record on page");
                results.push(ModelSummary::from(record));
            }
            i += 1;
        }

        // Records read from upstream, including the lookahead. Not a total.
        let scanned = if has_more { i + 1 } else { i };
        let elapsed = started.elapsed().as_millis() as u64;
        debug!(
            result_count = results.len(),
            scanned,
            has_more,
            duration_ms = elapsed,
            "Page walk complete"
        );
        if elapsed > HUB_SLOW_MS {
            warn!(
                scanned,
                duration_ms = elapsed,
                slow = true,
                "Slow page walk"
            );
        }

        Ok(Page { results, has_more })
    }
}

/// Fetch one page of search results from `source`.
pub async fn fetch_page(source: &dyn ModelSource, query: &SearchQuery) -> Result<Page> {
    PaginationWalker::new(source).fetch_page(query).await
}
