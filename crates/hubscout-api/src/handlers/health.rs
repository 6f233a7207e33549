//! Liveness endpoints.

use axum::Json;
use serde::Serialize;

/// Plain message response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the hubscout model search API!".to_string(),
    })
}

#[utoipa::path(get, path = "/api/ping", tag = "System",
    responses((status = 200, description = "Server is up", body = MessageResponse))
)]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "pong".to_string(),
    })
}

#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Server health and version", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
