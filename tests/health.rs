//! Integration tests for the health check endpoint and unmatched routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: GET /health returns the success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_success_envelope() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service is healthy");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
    assert!(json["data"]["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: unknown routes return the not-found envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "message": "resource not found" })
    );
}
