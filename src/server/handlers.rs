//! HTTP request handlers for the ImageKit proxy API.
//!
//! This module contains the Axum handlers for the upload-auth and deletion
//! endpoints plus the health check.
//!
//! # Endpoints
//!
//! - `GET /uploadImages` - Signed upload authentication parameters
//! - `POST /deleteImage` - Delete a stored image by file identifier
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::imagekit::{AuthParams, MediaApi, UploadAuth};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the signer and the Media API client.
///
/// Constructed once at startup and passed to all handlers via Axum's State
/// extractor; there is no other process-wide state.
pub struct AppState<M: MediaApi> {
    /// Generator for signed upload parameter bundles
    pub upload_auth: UploadAuth,

    /// Client for the image service's Media API
    pub media_api: Arc<M>,
}

impl<M: MediaApi> AppState<M> {
    /// Create a new application state.
    pub fn new(upload_auth: UploadAuth, media_api: M) -> Self {
        Self {
            upload_auth,
            media_api: Arc::new(media_api),
        }
    }
}

impl<M: MediaApi> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            upload_auth: self.upload_auth.clone(),
            media_api: Arc::clone(&self.media_api),
        }
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Request body for the deletion endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteImageRequest {
    /// Service-assigned identifier of the file to delete.
    ///
    /// Absent and `null` both deserialize to `None`; the identifier is
    /// otherwise forwarded without validation.
    #[serde(rename = "fileId", default)]
    pub file_id: Option<String>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Body-level outcome marker for a completed deletion.
pub const DELETE_STATUS_SUCCESS: &str = "success";

/// Body-level outcome marker for a failed deletion.
pub const DELETE_STATUS_FAILED: &str = "failed";

/// Message returned alongside a successful deletion.
pub const DELETE_SUCCESS_MESSAGE: &str =
    "Your image will NOT been stored until all transactions are completed successfully.";

/// Message returned when the deletion failed or was rejected.
pub const DELETE_FAILED_MESSAGE: &str = "Your image has been stored although the transactions \
     have failed. Please contact our team to have your image deleted.";

/// Envelope returned by the deletion endpoint.
///
/// The HTTP status is 200 for both outcomes; callers detect failure from the
/// `status` field. Existing clients of this API string-match on that field
/// and on the fixed `message` wording, so both are kept stable.
#[derive(Debug, Serialize)]
pub struct DeleteImageResponse {
    /// `"success"` or `"failed"`
    pub status: String,

    /// Payload relayed from the image service (absent when the service
    /// answered with no body)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Fixed human-readable outcome message
    pub message: String,
}

impl DeleteImageResponse {
    /// Build the success envelope around the service's response payload.
    pub fn success(result: Option<Value>) -> Self {
        Self {
            status: DELETE_STATUS_SUCCESS.to_string(),
            result,
            message: DELETE_SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Build the failed envelope around the relayed error payload.
    pub fn failed(error: Value) -> Self {
        Self {
            status: DELETE_STATUS_FAILED.to_string(),
            result: Some(error),
            message: DELETE_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle upload authentication requests.
///
/// # Endpoint
///
/// `GET /uploadImages`
///
/// # Response
///
/// `200 OK` with a freshly generated parameter bundle:
/// ```json
/// {
///   "token": "7d7e2d50-...",
///   "expire": 1735689600,
///   "signature": "08f7ddaa..."
/// }
/// ```
///
/// Signing is a local HMAC over static credentials and cannot fail, so no
/// error path exists.
pub async fn upload_auth_handler<M: MediaApi>(
    State(state): State<AppState<M>>,
) -> Json<AuthParams> {
    let params = state.upload_auth.generate();

    debug!(
        token = %params.token,
        expire = params.expire,
        "Issued upload authentication parameters"
    );

    Json(params)
}

/// Handle image deletion requests.
///
/// # Endpoint
///
/// `POST /deleteImage` with body `{"fileId": "..."}`
///
/// # Response
///
/// Always `200 OK` with the outcome envelope (see [`DeleteImageResponse`]):
/// the deletion result lives in the body's `status` field, not in the HTTP
/// status. A missing `fileId` is rejected by the client adapter before any
/// network call and reported through the same failed envelope.
pub async fn delete_image_handler<M: MediaApi>(
    State(state): State<AppState<M>>,
    Json(request): Json<DeleteImageRequest>,
) -> Json<DeleteImageResponse> {
    let file_id = request.file_id.unwrap_or_default();

    match state.media_api.delete_file(&file_id).await {
        Ok(result) => {
            info!(file_id = %file_id, "Deleted remote file");
            Json(DeleteImageResponse::success(result))
        }
        Err(err) => {
            warn!(file_id = %file_id, error = %err, "Remote deletion failed");
            Json(DeleteImageResponse::failed(err.into_payload()))
        }
    }
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
