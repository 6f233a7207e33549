//! Model detail endpoints.

use axum::extract::{Path, State};
use axum::Json;

use hubscout_core::ModelDetail;

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/models/{author}/{name}", tag = "Models",
    params(
        ("author" = String, Path, description = "Namespace, e.g. TheBloke"),
        ("name" = String, Path, description = "Repository name, e.g. Llama-2-7B-GGUF")
    ),
    responses(
        (status = 200, description = "Model detail", body = ModelDetail),
        (status = 404, description = "No such model", body = ErrorResponse),
        (status = 502, description = "Model hub failure", body = ErrorResponse)
    )
)]
pub async fn get_model(
    State(state): State<AppState>,
    Path((author, name)): Path<(String, String)>,
) -> Result<Json<ModelDetail>, ApiError> {
    let model_id = format!("{}/{}", author, name);
    Ok(Json(state.search.model_detail(&model_id).await?))
}

/// Legacy models without a namespace, e.g. `gpt2`.
#[utoipa::path(get, path = "/api/models/{name}", tag = "Models",
    params(("name" = String, Path, description = "Model id without namespace")),
    responses(
        (status = 200, description = "Model detail", body = ModelDetail),
        (status = 404, description = "No such model", body = ErrorResponse)
    )
)]
pub async fn get_unscoped_model(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ModelDetail>, ApiError> {
    Ok(Json(state.search.model_detail(&name).await?))
}
