//! ImageKit Media API client.
//!
//! File management calls go to the service's REST Media API, authenticated
//! with HTTP basic auth: the account private key as username and an empty
//! password. Deletion is the only call this server forwards:
//!
//! ```text
//! DELETE {api_base}/v1/files/{fileId}   ->   204 No Content
//! ```
//!
//! Error responses carry a JSON body (`{"message": ..., "help": ...}`) which
//! is relayed to callers untouched.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::error::MediaApiError;

// =============================================================================
// Configuration
// =============================================================================

/// Default base URL for the Media API.
pub const DEFAULT_API_BASE: &str = "https://api.imagekit.io";

// =============================================================================
// MediaApi Trait
// =============================================================================

/// Trait for issuing file management calls to the image service.
///
/// This abstraction lets the HTTP layer work against the real Media API or
/// an in-memory test double without being tied to a specific implementation.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Delete a stored file by its service-assigned identifier.
    ///
    /// # Arguments
    /// * `file_id` - The service's unique handle for the stored asset
    ///
    /// # Returns
    /// The service's response payload if it sent one (the usual
    /// `204 No Content` answer yields `None`).
    async fn delete_file(&self, file_id: &str) -> Result<Option<Value>, MediaApiError>;
}

// =============================================================================
// Reqwest Implementation
// =============================================================================

/// Media API client backed by reqwest.
///
/// No request timeout is configured: the caller waits as long as the service
/// does, and connection-level failures surface as
/// [`MediaApiError::Transport`].
#[derive(Clone)]
pub struct ImageKitMediaApi {
    /// Shared HTTP client
    client: Client,

    /// Base URL of the Media API
    api_base: Url,

    /// Account private key, sent as the basic auth username
    private_key: String,
}

impl ImageKitMediaApi {
    /// Create a new client for the given Media API base URL.
    ///
    /// # Arguments
    /// * `api_base` - Base URL of the Media API (see [`DEFAULT_API_BASE`])
    /// * `private_key` - Account private key used for basic auth
    pub fn new(api_base: Url, private_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base,
            private_key: private_key.into(),
        }
    }

    /// Build the deletion URL for a file identifier.
    ///
    /// The identifier is appended as-is; the service owns its format and
    /// rejects handles it does not recognize.
    fn delete_url(&self, file_id: &str) -> String {
        let base = self.api_base.as_str().trim_end_matches('/');
        format!("{}/v1/files/{}", base, file_id)
    }
}

#[async_trait]
impl MediaApi for ImageKitMediaApi {
    async fn delete_file(&self, file_id: &str) -> Result<Option<Value>, MediaApiError> {
        // The vendor SDK rejects requests without an id before any network
        // call; mirror that so a missing id never builds a malformed URL.
        if file_id.is_empty() {
            return Err(MediaApiError::MissingFileId);
        }

        let url = self.delete_url(file_id);
        debug!(url = %url, "requesting remote file deletion");

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.private_key, Some(""))
            .send()
            .await
            .map_err(|e| MediaApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MediaApiError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }
}

/// Map a Media API response to the deletion outcome.
///
/// Success bodies pass through as parsed JSON (a string body is kept as a
/// JSON string). Error bodies are relayed as the service sent them; bodies
/// that are not JSON are wrapped in the service's `{"message": ...}` shape.
fn parse_response(status: StatusCode, body: &str) -> Result<Option<Value>, MediaApiError> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(None);
        }
        // Deletion answers 204, but relay any body the service does send
        match serde_json::from_str(body) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(Some(Value::String(body.to_string()))),
        }
    } else {
        let payload = serde_json::from_str(body).unwrap_or_else(|_| {
            if body.is_empty() {
                json!({
                    "message": format!("Media API request failed with status {}", status.as_u16()),
                })
            } else {
                json!({ "message": body })
            }
        });

        Err(MediaApiError::Api {
            status: status.as_u16(),
            payload,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
