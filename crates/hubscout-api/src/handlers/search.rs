//! Model search endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use hubscout_core::{defaults, ModelSummary, SortKey};
use hubscout_search::SearchRequest;

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

fn default_page() -> u32 {
    defaults::PAGE
}

fn default_page_size() -> u32 {
    defaults::PAGE_SIZE
}

/// Query string of `GET /api/search/models`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text query. A task phrase in it ("text generation") becomes a task filter.
    pub query: Option<String>,
    /// `downloads` (default), `likes` or `lastModified`. Unknown keys fall back to `downloads`.
    pub sort_by: Option<String>,
    /// Page number, starting at 1.
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: u32,
    /// Results per page, 1 to 50.
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 50)]
    pub page_size: u32,
    /// Explicit task filter; disables keyword extraction.
    pub pipeline_tag: Option<String>,
    /// Library filter, e.g. `gguf` or `transformers`.
    pub library: Option<String>,
}

impl From<SearchParams> for SearchRequest {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.query,
            sort_by: params.sort_by,
            page: params.page,
            page_size: params.page_size,
            pipeline_tag: params.pipeline_tag,
            library: params.library,
        }
    }
}

/// One page of search results.
///
/// There is no total count; `has_more` says whether another page exists.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    /// The query as sent by the client.
    pub query: Option<String>,
    /// Sort key actually applied.
    pub sort_by: SortKey,
    pub page: u32,
    pub page_size: u32,
    /// Explicit or derived task filter.
    pub pipeline_tag: Option<String>,
    pub results: Vec<ModelSummary>,
    pub has_more: bool,
}

#[utoipa::path(get, path = "/api/search/models", tag = "Search",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of matching models", body = SearchResponse),
        (status = 400, description = "Invalid page or page_size", body = ErrorResponse),
        (status = 502, description = "Model hub failure", body = ErrorResponse)
    )
)]
pub async fn search_models(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let raw_query = params.query.clone();
    let (page, page_size) = (params.page, params.page_size);

    let outcome = state.search.search(params.into()).await?;

    Ok(Json(SearchResponse {
        query: raw_query,
        sort_by: outcome.sort,
        page,
        page_size,
        pipeline_tag: outcome.task_tag,
        results: outcome.page.results,
        has_more: outcome.page.has_more,
    }))
}
