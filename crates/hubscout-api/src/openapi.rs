//! OpenAPI document, served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use hubscout_core::{BinaryFileDetail, ModelCardData, ModelDetail, ModelSummary, RemoteFile, SortKey};

use crate::error::ErrorResponse;
use crate::handlers::health::{HealthResponse, MessageResponse};
use crate::handlers::search::SearchResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "hubscout API",
        description = "Model hub search with task keyword extraction and cursor pagination"
    ),
    paths(
        crate::handlers::search::search_models,
        crate::handlers::models::get_model,
        crate::handlers::models::get_unscoped_model,
        crate::handlers::health::ping,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        SearchResponse,
        ModelSummary,
        ModelDetail,
        BinaryFileDetail,
        ModelCardData,
        RemoteFile,
        SortKey,
        ErrorResponse,
        HealthResponse,
        MessageResponse,
    )),
    tags(
        (name = "Search", description = "Model search"),
        (name = "Models", description = "Model detail"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
