use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur when calling the ImageKit Media API
#[derive(Debug, Clone, Error)]
pub enum MediaApiError {
    /// No file identifier was supplied with the request
    #[error("Missing file ID parameter for this request")]
    MissingFileId,

    /// The service answered with a non-success status code
    #[error("Media API request failed with status {status}")]
    Api {
        /// HTTP status returned by the service
        status: u16,
        /// Error body as the service sent it
        payload: Value,
    },

    /// Network or connection error before a response was received
    #[error("Connection error: {0}")]
    Transport(String),
}

impl MediaApiError {
    /// Convert the error into the payload relayed to callers.
    ///
    /// `Api` errors pass the service's own body through untouched; local
    /// errors are wrapped in the same `{message, help}` shape the service
    /// uses, so callers see one format regardless of where the failure
    /// happened.
    pub fn into_payload(self) -> Value {
        match self {
            MediaApiError::MissingFileId => json!({
                "message": MediaApiError::MissingFileId.to_string(),
                "help": "",
            }),
            MediaApiError::Api { payload, .. } => payload,
            MediaApiError::Transport(message) => json!({ "message": message }),
        }
    }
}
