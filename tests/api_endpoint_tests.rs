//! API endpoint tests
//!
//! These tests drive the full router with in-process requests and cover the
//! generation endpoint's framing guarantees, parameter validation and
//! response headers, plus the health endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use bytesmith::api::{create_router, router::AppState};
use bytesmith::application::use_cases::GenerateFileUseCase;
use bytesmith::domain::profiles::ProfileCatalog;

/// Router wired like production, with a small size cap for the 413 tests
fn test_app() -> Router {
    let catalog = Arc::new(ProfileCatalog::builtin());
    let generate_use_case = Arc::new(GenerateFileUseCase::new(catalog, 64 * 1024 * 1024));

    create_router(AppState {
        generate_use_case,
        stream_buffer_chunks: 4,
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "bytesmith");
}

#[tokio::test]
async fn generates_pdf_with_exact_size_and_framing() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=1024&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/octet-stream"
    );
    assert_eq!(response.headers()["content-length"], "1024");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"dummy_1024_bytes.pdf\""
    );

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 1024);
    assert_eq!(&body[..9], b"%PDF-1.5\n");
    assert_eq!(&body[1024 - 6..], b"\n%%EOF");
    assert!(body[9..1024 - 6].iter().all(|&b| b == 0));
}

#[tokio::test]
async fn generates_a_megabyte_through_a_small_buffer() {
    // 1 MiB through a 4-chunk buffer forces many suspension cycles
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=1048576&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-length"], "1048576");

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 1_048_576);
    assert_eq!(&body[..9], b"%PDF-1.5\n");
    assert_eq!(&body[1_048_576 - 6..], b"\n%%EOF");
    assert!(body[9..1_048_576 - 6].iter().all(|&b| b == 0));
}

#[tokio::test]
async fn size_equal_to_header_returns_the_bare_signature() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=9&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), b"%PDF-1.5\n");
}

#[tokio::test]
async fn tiny_size_truncates_the_signature() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=4&type=pdf"))
        .await
        .unwrap();

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), b"%PDF");
}

#[tokio::test]
async fn jpg_carries_signature_and_trailer() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=100&type=jpg"))
        .await
        .unwrap();

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 100);
    assert_eq!(&body[..3], &[0xFF, 0xD8, 0xFF]);
    assert_eq!(&body[98..], &[0xFF, 0xD9]);
}

#[tokio::test]
async fn txt_is_pure_zero_filler() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=256&type=txt"))
        .await
        .unwrap();

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 256);
    assert!(body.iter().all(|&b| b == 0));
}

#[tokio::test]
async fn unknown_type_degrades_to_empty_profile() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=100&type=weird"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"dummy_100_bytes.weird\""
    );

    let body = body_bytes(response).await;
    assert_eq!(body.len(), 100);
    assert!(body.iter().all(|&b| b == 0));
}

#[tokio::test]
async fn missing_size_is_rejected() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_type_is_rejected() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_size_is_rejected_with_json_error() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=0&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("positive"));
}

#[tokio::test]
async fn negative_size_is_rejected() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=-5&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_size_is_rejected() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=huge&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_request_is_rejected_before_streaming() {
    // Test cap is 64 MiB
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=67108865&type=pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("maximum"));
}

#[tokio::test]
async fn custom_name_gets_the_type_extension() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=100&type=pdf&name=report"))
        .await
        .unwrap();

    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"report.pdf\""
    );
}

#[tokio::test]
async fn hostile_name_is_sanitized() {
    let response = test_app()
        .oneshot(get("/api/v1/generate?size=100&type=txt&name=..%2F..%2Fetc%2Fpasswd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(!disposition.contains('/'));
    assert!(disposition.ends_with(".txt\""));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = test_app()
        .oneshot(get("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["paths"]["/api/v1/generate"].is_object());
}
