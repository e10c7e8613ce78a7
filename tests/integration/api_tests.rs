//! Cross-cutting HTTP surface tests.
//!
//! Tests verify:
//! - The pinned CORS origin header on every endpoint
//! - Preflight handling
//! - Request body cap (oversized bodies rejected before the handler)
//! - Health check, unknown routes, and method routing

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use imagekit_proxy::server::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_BODY_LIMIT};

use super::test_utils::{body_json, get_request, post_json, test_router, MockMediaApi};

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_header_on_upload_auth() {
    let router = test_router(MockMediaApi::new());

    let response = router.oneshot(get_request("/uploadImages")).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        DEFAULT_ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn test_cors_header_on_delete() {
    let router = test_router(MockMediaApi::new());

    let request = post_json("/deleteImage", json!({"fileId": "abc123"}));
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        DEFAULT_ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let router = test_router(MockMediaApi::new());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/deleteImage")
        .header(header::ORIGIN, DEFAULT_ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        DEFAULT_ALLOWED_ORIGIN
    );
}

// =============================================================================
// Body Cap
// =============================================================================

#[tokio::test]
async fn test_oversized_body_rejected() {
    let router = test_router(MockMediaApi::new());

    // A fileId pushing the body past the 1 MB cap
    let request = post_json(
        "/deleteImage",
        json!({"fileId": "a".repeat(DEFAULT_BODY_LIMIT + 1)}),
    );

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_body_under_cap_reaches_handler() {
    let router = test_router(MockMediaApi::new());

    // Large but within the cap; the handler answers with the usual envelope
    let request = post_json("/deleteImage", json!({"fileId": "a".repeat(64 * 1024)}));

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "failed");
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router(MockMediaApi::new());

    let response = router.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_404() {
    let router = test_router(MockMediaApi::new());

    let response = router.oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_post() {
    let router = test_router(MockMediaApi::new());

    let response = router.oneshot(get_request("/deleteImage")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
