//! Router tests against the in-memory model source.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use hubscout_api::{build_router, parse_allowed_origins, AppState};
use hubscout_core::{RemoteFile, RemoteModelRecord};
use hubscout_search::mock::MockModelSource;

fn app(source: MockModelSource) -> Router {
    build_router(
        AppState::new(Arc::new(source)),
        parse_allowed_origins("http://localhost:5173"),
    )
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_root_and_ping() {
    let (status, body) = get(app(MockModelSource::with_models(0)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the hubscout model search API!");

    let (status, body) = get(app(MockModelSource::with_models(0)), "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn test_health_reports_version() {
    let (status, body) = get(app(MockModelSource::with_models(0)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_search_defaults() {
    let (status, body) = get(app(MockModelSource::with_models(25)), "/api/search/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 20);
    assert_eq!(body["sort_by"], "downloads");
    assert_eq!(body["results"].as_array().unwrap().len(), 20);
    assert_eq!(body["has_more"], true);
    assert!(body.get("total").is_none());
}

#[tokio::test]
async fn test_search_pages() {
    let cases = [(1, 10, true), (3, 5, false), (4, 0, false)];
    for (page, len, has_more) in cases {
        let uri = format!("/api/search/models?page={}&page_size=10", page);
        let (status, body) = get(app(MockModelSource::with_models(25)), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), len, "page {}", page);
        assert_eq!(body["has_more"], has_more, "page {}", page);
    }
}

#[tokio::test]
async fn test_search_derives_pipeline_tag_and_echoes_query() {
    let source = MockModelSource::with_models(3);
    let (status, body) = get(
        app(source.clone()),
        "/api/search/models?query=llama%20text%20generation",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "llama text generation");
    assert_eq!(body["pipeline_tag"], "text-generation");
    assert_eq!(source.last_params().unwrap().search.as_deref(), Some("llama"));
}

#[tokio::test]
async fn test_search_invalid_sort_falls_back() {
    let (status, body) = get(
        app(MockModelSource::with_models(3)),
        "/api/search/models?sort_by=popularity",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sort_by"], "downloads");
}

#[tokio::test]
async fn test_search_result_shape() {
    let mut records = MockModelSource::generate_records(1);
    records[0].files = vec![RemoteFile::new("Model.GGUF")];
    let (_, body) = get(app(MockModelSource::new(records)), "/api/search/models").await;
    let item = &body["results"][0];
    assert_eq!(item["id"], "org/model-0");
    assert_eq!(item["has_gguf"], true);
    assert_eq!(item["pipelineTag"], "text-generation");
    assert!(item.get("lastModified").is_some());
    assert!(item.get("private").is_some());
}

#[tokio::test]
async fn test_search_rejects_bad_paging() {
    for uri in [
        "/api/search/models?page=0",
        "/api/search/models?page_size=0",
        "/api/search/models?page_size=51",
        "/api/search/models?page=abc",
    ] {
        let (status, body) = get(app(MockModelSource::with_models(3)), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_search_upstream_failure_is_bad_gateway() {
    let (status, body) = get(
        app(MockModelSource::with_models(30).fail_after(5)),
        "/api/search/models?page_size=10",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("Upstream"));
}

#[tokio::test]
async fn test_model_detail() {
    let record = RemoteModelRecord {
        id: "TheBloke/Llama-2-7B-GGUF".to_string(),
        author: Some("TheBloke".to_string()),
        files: vec![
            RemoteFile::new("README.md"),
            RemoteFile::new("llama-2-7b.Q5_K_S.gguf").with_size(4_650_000_000),
        ],
        ..Default::default()
    };
    let source = MockModelSource::new(vec![record]).with_readme("TheBloke/Llama-2-7B-GGUF", "# Llama");

    let (status, body) = get(app(source), "/api/models/TheBloke/Llama-2-7B-GGUF").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "TheBloke/Llama-2-7B-GGUF");
    assert_eq!(body["readme_content"], "# Llama");
    assert_eq!(body["gguf_files"][0]["quantization"], "Q5_K_S");
    assert_eq!(body["gguf_files"][0]["size_bytes"], 4_650_000_000u64);
    assert_eq!(body["siblings"].as_array().unwrap().len(), 2);
    assert_eq!(body["siblings"][0]["rfilename"], "README.md");
}

#[tokio::test]
async fn test_model_detail_not_found() {
    let (status, body) = get(app(MockModelSource::with_models(1)), "/api/models/nobody/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nobody/nothing"));
}

#[tokio::test]
async fn test_unscoped_model_detail() {
    let record = RemoteModelRecord {
        id: "gpt2".to_string(),
        ..Default::default()
    };
    let (status, body) = get(app(MockModelSource::new(vec![record])), "/api/models/gpt2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["readme_content"], "README not found.");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get(app(MockModelSource::with_models(0)), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/search/models"].is_object());
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = app(MockModelSource::with_models(0))
        .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let response = app(MockModelSource::with_models(0))
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn test_cors_allows_configured_origin_only() {
    let request = |origin: &'static str| {
        Request::builder()
            .uri("/api/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let response = app(MockModelSource::with_models(0))
        .oneshot(request("http://localhost:5173"))
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:5173"))
    );

    let response = app(MockModelSource::with_models(0))
        .oneshot(request("https://evil.example"))
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
