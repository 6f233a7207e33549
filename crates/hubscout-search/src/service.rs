//! Search orchestration: normalize, validate, walk.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use hubscout_core::{defaults, ModelDetail, ModelSource, Page, Result, SearchQuery, SortKey};

use crate::detail;
use crate::normalizer::normalize;
use crate::walker::PaginationWalker;

/// Raw search parameters as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub pipeline_tag: Option<String>,
    pub library: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            sort_by: None,
            page: defaults::PAGE,
            page_size: defaults::PAGE_SIZE,
            pipeline_tag: None,
            library: None,
        }
    }
}

/// A materialized page together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub page: Page,
    /// Sort key actually used, after fallback.
    pub sort: SortKey,
    /// Query text sent upstream, after keyword extraction.
    pub residual_query: Option<String>,
    /// Explicit or derived task tag.
    pub task_tag: Option<String>,
}

/// Entry point for model search and lookup over a `ModelSource`.
#[derive(Clone)]
pub struct SearchService {
    source: Arc<dyn ModelSource>,
}

impl SearchService {
    pub fn new(source: Arc<dyn ModelSource>) -> Self {
        Self { source }
    }

    /// Run a search and return one page of results.
    ///
    /// Unrecognized sort keys fall back to the default. Out-of-range paging
    /// fails with `InvalidParameter` before anything is requested upstream.
    #[instrument(skip(self, request), fields(
        subsystem = "search",
        component = "service",
        op = "search",
        page = request.page,
        page_size = request.page_size,
    ))]
    pub async fn search(&self, request: SearchRequest) -> Result<SearchOutcome> {
        let started = Instant::now();

        let (sort, fell_back) = SortKey::parse_or_default(request.sort_by.as_deref());
        if fell_back {
            warn!(
                requested = request.sort_by.as_deref().unwrap_or(""),
                fallback = %sort,
                "Unrecognized sort key, using default"
            );
        }

        let normalized = normalize(request.query.as_deref(), request.pipeline_tag.as_deref());

        let query = SearchQuery::new(normalized.query.clone(), sort, request.page, request.page_size)?
            .with_task_tag(normalized.task_tag.clone())
            .with_library(request.library);

        let page = PaginationWalker::new(self.source.as_ref())
            .fetch_page(&query)
            .await?;

        info!(
            query = request.query.as_deref().unwrap_or(""),
            task_tag = normalized.task_tag.as_deref().unwrap_or(""),
            derived = normalized.is_derived(),
            result_count = page.results.len(),
            has_more = page.has_more,
            duration_ms = started.elapsed().as_millis() as u64,
            "Search complete"
        );

        Ok(SearchOutcome {
            page,
            sort,
            residual_query: normalized.query,
            task_tag: normalized.task_tag,
        })
    }

    /// Fetch the full detail view of one model.
    pub async fn model_detail(&self, model_id: &str) -> Result<ModelDetail> {
        debug!(model_id, "Fetching model detail");
        detail::model_detail(self.source.as_ref(), model_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockModelSource;
    use hubscout_core::Error;

    fn service(source: MockModelSource) -> SearchService {
        SearchService::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_derived_task_tag_sent_upstream() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());
        let outcome = svc
            .search(SearchRequest {
                query: Some("llama text generation".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(outcome.task_tag.as_deref(), Some("text-generation"));
        assert_eq!(outcome.residual_query.as_deref(), Some("llama"));
        let params = source.last_params().unwrap();
        assert_eq!(params.search.as_deref(), Some("llama"));
        assert_eq!(params.task_tag.as_deref(), Some("text-generation"));
    }

    #[tokio::test]
    async fn test_explicit_tag_keeps_query() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());
        let outcome = svc
            .search(SearchRequest {
                query: Some("whisper asr".to_string()),
                pipeline_tag: Some("audio-classification".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(outcome.task_tag.as_deref(), Some("audio-classification"));
        let params = source.last_params().unwrap();
        assert_eq!(params.search.as_deref(), Some("whisper asr"));
    }

    #[tokio::test]
    async fn test_invalid_sort_falls_back() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());
        let outcome = svc
            .search(SearchRequest {
                sort_by: Some("stars".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(outcome.sort, SortKey::Downloads);
        assert_eq!(outcome.page.results.len(), 5);
        assert_eq!(source.last_params().unwrap().sort, SortKey::Downloads);
    }

    #[tokio::test]
    async fn test_sort_key_passed_through() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());
        let outcome = svc
            .search(SearchRequest {
                sort_by: Some("lastModified".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(outcome.sort, SortKey::LastModified);
    }

    #[tokio::test]
    async fn test_out_of_range_page_rejected_before_walk() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());

        let err = svc
            .search(SearchRequest {
                page: 0,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = svc
            .search(SearchRequest {
                page_size: 51,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        assert!(source.last_params().is_none());
        assert_eq!(source.records_read(), 0);
    }

    #[tokio::test]
    async fn test_library_filter_passed_through() {
        let source = MockModelSource::with_models(5);
        let svc = service(source.clone());
        svc.search(SearchRequest {
            library: Some("gguf".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(source.last_params().unwrap().library.as_deref(), Some("gguf"));
    }

    #[tokio::test]
    async fn test_model_detail_delegates() {
        let svc = service(MockModelSource::with_models(2));
        let detail = svc.model_detail("org/model-1").await.unwrap();
        assert_eq!(detail.id, "org/model-1");
        assert!(detail.gguf_files.is_empty());
    }
}
