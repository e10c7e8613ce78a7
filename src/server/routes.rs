//! Router configuration for the ImageKit proxy.
//!
//! This module defines the HTTP routes and applies the body-size cap, CORS,
//! and request tracing middleware.
//!
//! # Route Structure
//!
//! ```text
//! /uploadImages    - Signed upload authentication parameters (GET)
//! /deleteImage     - Delete a stored image (POST)
//! /health          - Health check (GET)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use imagekit_proxy::imagekit::{ImageKitMediaApi, UploadAuth};
//! use imagekit_proxy::server::{create_router, RouterConfig};
//!
//! let upload_auth = UploadAuth::new("private_...");
//! let media_api = ImageKitMediaApi::new(api_base, "private_...");
//!
//! let config = RouterConfig::new("http://localhost:3000");
//! let router = create_router(upload_auth, media_api, config);
//!
//! // Run the server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{delete_image_handler, health_handler, upload_auth_handler, AppState};
use crate::imagekit::{MediaApi, UploadAuth};

// =============================================================================
// Defaults
// =============================================================================

/// Default CORS origin emitted on every response.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default request body cap in bytes (1 MB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// CORS origin emitted on responses (None = allow any origin)
    pub allowed_origin: Option<String>,

    /// Maximum accepted request body size in bytes
    pub body_limit: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration pinned to one allowed origin.
    ///
    /// By default:
    /// - Request bodies are capped at 1 MB
    /// - Tracing is enabled
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: Some(allowed_origin.into()),
            body_limit: DEFAULT_BODY_LIMIT,
            enable_tracing: true,
        }
    }

    /// Allow any CORS origin.
    ///
    /// The pinned origin header disappears; responses mirror whatever origin
    /// asked. Meant for development setups with several local frontends.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.allowed_origin = None;
        self
    }

    /// Set the maximum accepted request body size in bytes.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The two proxy routes plus the health check
/// - The request body cap (applied before any handler runs)
/// - CORS configuration
/// - Request tracing (optional)
///
/// # Arguments
///
/// * `upload_auth` - Signer for upload parameter bundles
/// * `media_api` - Client for the image service's Media API
/// * `config` - Router configuration
///
/// # Returns
///
/// A configured Axum router ready to be served.
pub fn create_router<M>(upload_auth: UploadAuth, media_api: M, config: RouterConfig) -> Router
where
    M: MediaApi + 'static,
{
    // Create application state
    let app_state = AppState::new(upload_auth, media_api);

    // Build CORS layer
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/uploadImages", get(upload_auth_handler::<M>))
        .route("/deleteImage", post(delete_image_handler::<M>))
        .route("/health", get(health_handler))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors);

    // Add tracing if enabled
    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
///
/// A pinned origin uses `AllowOrigin::exact`, which emits the
/// `Access-Control-Allow-Origin` header on every response regardless of the
/// request's `Origin` header. That matches what this API's existing clients
/// expect: the header is part of the response contract, not a negotiation.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.allowed_origin {
        None => cors.allow_origin(Any),
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => cors.allow_origin(AllowOrigin::exact(value)),
            // Config::validate rejects unparseable origins upfront; an
            // invalid value here emits no origin header at all.
            Err(_) => cors,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
