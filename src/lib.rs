//! # ImageKit Proxy
//!
//! A small HTTP server fronting an ImageKit account.
//!
//! This library provides the pieces of a proxy that keeps the account's
//! private key on the server while letting browsers work with the image
//! service directly: clients fetch signed upload authentication parameters
//! from one endpoint and request image deletions through another, and the
//! proxy forwards the deletion to the service's Media API on their behalf.
//!
//! ## Features
//!
//! - **Signed upload parameters**: Fresh `{token, expire, signature}` bundles
//!   computed locally with HMAC-SHA1; the private key never leaves the process
//! - **Deletion forwarding**: `POST /deleteImage` relays to the Media API and
//!   reports the outcome in a stable response envelope
//! - **Pinned CORS origin**: Every response carries the configured
//!   `Access-Control-Allow-Origin` header
//! - **Request body cap**: Oversized bodies are rejected before any handler runs
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`imagekit`] - Service adapter: upload token signing and the Media API client
//! - [`server`] - Axum-based HTTP handlers and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Media API error type
//!
//! ## Example
//!
//! ```rust,no_run
//! use imagekit_proxy::imagekit::{ImageKitMediaApi, UploadAuth, DEFAULT_API_BASE};
//! use imagekit_proxy::server::{create_router, RouterConfig};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api_base = Url::parse(DEFAULT_API_BASE).unwrap();
//!
//!     let upload_auth = UploadAuth::new("private_...");
//!     let media_api = ImageKitMediaApi::new(api_base, "private_...");
//!     let router = create_router(
//!         upload_auth,
//!         media_api,
//!         RouterConfig::new("http://localhost:3000"),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod imagekit;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::MediaApiError;
pub use imagekit::{
    AuthParams, ImageKitMediaApi, MediaApi, UploadAuth, DEFAULT_API_BASE, DEFAULT_TOKEN_TTL,
};
pub use server::{
    create_router, delete_image_handler, health_handler, upload_auth_handler, AppState,
    DeleteImageRequest, DeleteImageResponse, HealthResponse, RouterConfig, DEFAULT_ALLOWED_ORIGIN,
    DEFAULT_BODY_LIMIT, DELETE_FAILED_MESSAGE, DELETE_STATUS_FAILED, DELETE_STATUS_SUCCESS,
    DELETE_SUCCESS_MESSAGE,
};
