//! ImageKit Proxy - signed upload parameters and image deletion over HTTP.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imagekit_proxy::{
    config::{Config, DEFAULT_ENV_FILE, ENV_FILE_VAR},
    imagekit::{ImageKitMediaApi, UploadAuth},
    server::{create_router, RouterConfig},
};

#[tokio::main]
async fn main() -> ExitCode {
    // The env file must be loaded before clap parses arguments, so that
    // flags with env fallbacks (the account keys in particular) see it.
    load_env_file();

    let config = Config::parse();

    run_serve(config).await
}

// =============================================================================
// Serve
// =============================================================================

async fn run_serve(config: Config) -> ExitCode {
    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("imagekit-proxy v{}", env!("CARGO_PKG_VERSION"));
    info!("");
    info!("Configuration:");
    info!("  Public key: {}", config.public_key);
    info!("  URL endpoint: {}", config.url_endpoint);
    info!("  Media API: {}", config.api_base);
    info!("  Allowed origin: {}", config.allowed_origin);
    info!("  Body limit: {} bytes", config.body_limit);
    info!("  Token TTL: {}s", config.token_ttl);

    // Create the upload signer and the Media API client. Both hold the
    // private key; neither ever logs it.
    let upload_auth = UploadAuth::new(&config.private_key)
        .with_token_ttl(Duration::from_secs(config.token_ttl));
    let media_api = ImageKitMediaApi::new(config.api_base.clone(), &config.private_key);

    // Build router configuration
    let router_config = RouterConfig::new(&config.allowed_origin)
        .with_body_limit(config.body_limit)
        .with_tracing(!config.no_tracing);

    // Create router
    let router = create_router(upload_auth, media_api, router_config);

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/uploadImages", addr);
    info!("");
    info!("  Delete a stored image:");
    info!(
        "    curl -X POST http://{}/deleteImage \\",
        addr
    );
    info!("         -H 'Content-Type: application/json' -d '{{\"fileId\": \"<id>\"}}'");
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Load the env file holding the account keys.
///
/// The file is optional: keys may come from the real environment instead,
/// and [`Config::validate`] reports if they are missing entirely.
fn load_env_file() {
    let path = std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    let _ = dotenvy::from_filename(&path);
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "imagekit_proxy=debug,tower_http=debug"
    } else {
        "imagekit_proxy=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
