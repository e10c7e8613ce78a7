//! Tests for the reqwest Media API adapter against a local stub service.
//!
//! The stub is a small axum server bound to an ephemeral port that speaks
//! the Media API's deletion protocol: `204 No Content` for a known file,
//! `404` with the service's JSON error body otherwise. Requests it sees are
//! recorded so tests can assert on the wire format.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::delete;
use axum::{Json, Router};
use serde_json::json;
use url::Url;

use imagekit_proxy::error::MediaApiError;
use imagekit_proxy::imagekit::{ImageKitMediaApi, MediaApi};

// =============================================================================
// Stub Media API Service
// =============================================================================

/// One deletion request as the stub saw it.
#[derive(Clone, Debug)]
struct SeenRequest {
    file_id: String,
    authorization: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn stub_delete(
    State(state): State<StubState>,
    Path(file_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.seen.lock().unwrap().push(SeenRequest {
        file_id: file_id.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
    });

    if file_id == "existing" {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "The requested file does not exist.",
                "help": "",
            })),
        )
            .into_response()
    }
}

/// Start the stub on an ephemeral port and return its base URL.
async fn spawn_stub() -> (Url, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/v1/files/{file_id}", delete(stub_delete))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Url::parse(&format!("http://{}", addr)).unwrap(), state)
}

// =============================================================================
// Adapter Tests
// =============================================================================

#[tokio::test]
async fn test_delete_existing_file_maps_no_content_to_none() {
    let (base, state) = spawn_stub().await;
    let client = ImageKitMediaApi::new(base, "private_test_key_000");

    let result = client.delete_file("existing").await.unwrap();
    assert!(result.is_none());

    let seen = state.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].file_id, "existing");
}

#[tokio::test]
async fn test_delete_sends_private_key_as_basic_auth() {
    let (base, state) = spawn_stub().await;
    let client = ImageKitMediaApi::new(base, "private_test_key_000");

    client.delete_file("existing").await.unwrap();

    // base64("private_test_key_000:") - key as username, empty password
    let seen = state.seen.lock().unwrap();
    assert_eq!(
        seen[0].authorization.as_deref(),
        Some("Basic cHJpdmF0ZV90ZXN0X2tleV8wMDA6")
    );
}

#[tokio::test]
async fn test_delete_unknown_file_relays_error_body() {
    let (base, _state) = spawn_stub().await;
    let client = ImageKitMediaApi::new(base, "private_test_key_000");

    let result = client.delete_file("no-such-file").await;

    match result {
        Err(MediaApiError::Api { status, payload }) => {
            assert_eq!(status, 404);
            assert_eq!(payload["message"], "The requested file does not exist.");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_file_id_never_contacts_service() {
    let (base, state) = spawn_stub().await;
    let client = ImageKitMediaApi::new(base, "private_test_key_000");

    let result = client.delete_file("").await;

    assert!(matches!(result, Err(MediaApiError::MissingFileId)));
    assert!(state.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_service_maps_to_transport_error() {
    // Port 1 is never listening
    let client = ImageKitMediaApi::new(
        Url::parse("http://127.0.0.1:1").unwrap(),
        "private_test_key_000",
    );

    let result = client.delete_file("abc123").await;
    assert!(matches!(result, Err(MediaApiError::Transport(_))));
}
