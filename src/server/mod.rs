//! HTTP server layer for the ImageKit proxy.
//!
//! This module provides the HTTP API that fronts the image service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      HTTP Layer                         │
//! │     GET /uploadImages          POST /deleteImage        │
//! │                                                         │
//! │  ┌──────────────────────┐  ┌─────────────────────────┐  │
//! │  │      handlers        │  │         routes          │  │
//! │  │ (request/response)   │  │ (router config, CORS,   │  │
//! │  │                      │  │  body cap, tracing)     │  │
//! │  └──────────────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    delete_image_handler, health_handler, upload_auth_handler, AppState, DeleteImageRequest,
    DeleteImageResponse, HealthResponse, DELETE_FAILED_MESSAGE, DELETE_STATUS_FAILED,
    DELETE_STATUS_SUCCESS, DELETE_SUCCESS_MESSAGE,
};
pub use routes::{create_router, RouterConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BODY_LIMIT};
