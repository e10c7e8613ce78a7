//! Configuration management for the ImageKit proxy.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables
//! - Sensible defaults for everything except the account keys
//!
//! # Example
//!
//! ```ignore
//! use imagekit_proxy::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! println!("Listening on {}", config.bind_address());
//! ```
//!
//! # Environment Variables
//!
//! - `IMAGEKIT_PUBLIC_KEY` - Account public key (required)
//! - `IMAGEKIT_PRIVATE_KEY` - Account private key (required)
//! - `IMAGEKIT_URL_ENDPOINT` - Account URL endpoint
//! - `IMAGEKIT_API_BASE` - Media API base URL (override for stubs)
//! - `IKPROXY_HOST` - Server bind address (default: 0.0.0.0)
//! - `IKPROXY_PORT` - Server port (default: 3000)
//! - `IKPROXY_ALLOWED_ORIGIN` - CORS origin emitted on responses
//! - `IKPROXY_BODY_LIMIT` - Request body cap in bytes (default: 1 MB)
//! - `IKPROXY_TOKEN_TTL` - Upload token validity in seconds (default: 1800)
//! - `IKPROXY_ENV_FILE` - Env file loaded before argument parsing
//!
//! The account keys usually live in a local env file
//! (`IMAGEKIT_KEYS.env` by default) that is loaded at startup and stays out
//! of version control.

use clap::Parser;
use http::HeaderValue;
use url::Url;

use crate::imagekit::{DEFAULT_API_BASE, DEFAULT_TOKEN_TTL};
use crate::server::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_BODY_LIMIT};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default account URL endpoint (the base the browser uploads against).
pub const DEFAULT_URL_ENDPOINT: &str = "https://ik.imagekit.io/thegivingkind2021";

/// Default env file holding the account keys.
pub const DEFAULT_ENV_FILE: &str = "IMAGEKIT_KEYS.env";

/// Environment variable overriding the env file path.
///
/// This one cannot be a CLI flag: the file is loaded before arguments are
/// parsed so that flags with env fallbacks see its values.
pub const ENV_FILE_VAR: &str = "IKPROXY_ENV_FILE";

/// Longest token validity the upload API accepts, in seconds.
const MAX_TOKEN_TTL_SECS: u64 = 3600;

// =============================================================================
// CLI Arguments
// =============================================================================

/// ImageKit proxy - signed upload parameters and image deletion over HTTP.
///
/// Fronts an ImageKit account with two endpoints: one hands browsers the
/// signed parameters they need to upload directly to the service, the other
/// forwards image deletions to the service's Media API. The private key
/// never leaves this process.
#[derive(Parser, Debug, Clone)]
#[command(name = "imagekit-proxy")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "IKPROXY_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "IKPROXY_PORT")]
    pub port: u16,

    // =========================================================================
    // Account Configuration
    // =========================================================================
    /// ImageKit public API key.
    #[arg(long, env = "IMAGEKIT_PUBLIC_KEY")]
    pub public_key: String,

    /// ImageKit private API key.
    ///
    /// Signs upload tokens and authenticates Media API calls. Keep it in the
    /// env file; it is never logged.
    #[arg(long, env = "IMAGEKIT_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// ImageKit URL endpoint for the account.
    #[arg(long, default_value = DEFAULT_URL_ENDPOINT, env = "IMAGEKIT_URL_ENDPOINT")]
    pub url_endpoint: String,

    /// Base URL of the ImageKit Media API.
    ///
    /// Only worth changing when pointing the proxy at a stub service.
    #[arg(long, default_value = DEFAULT_API_BASE, env = "IMAGEKIT_API_BASE")]
    pub api_base: Url,

    // =========================================================================
    // HTTP Configuration
    // =========================================================================
    /// CORS origin emitted on every response.
    #[arg(long, default_value = DEFAULT_ALLOWED_ORIGIN, env = "IKPROXY_ALLOWED_ORIGIN")]
    pub allowed_origin: String,

    /// Maximum accepted request body size in bytes.
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT, env = "IKPROXY_BODY_LIMIT")]
    pub body_limit: usize,

    /// Upload token validity window in seconds (1-3600).
    #[arg(long, default_value_t = DEFAULT_TOKEN_TTL.as_secs(), env = "IKPROXY_TOKEN_TTL")]
    pub token_ttl: u64,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        // Both keys are required; clap enforces presence but an env file can
        // still hand us empty strings
        if self.public_key.is_empty() {
            return Err(
                "ImageKit public key is required. Set --public-key or IMAGEKIT_PUBLIC_KEY"
                    .to_string(),
            );
        }
        if self.private_key.is_empty() {
            return Err(
                "ImageKit private key is required. Set --private-key or IMAGEKIT_PRIVATE_KEY"
                    .to_string(),
            );
        }

        // The service's client libraries refuse to construct without a URL
        // endpoint; refuse to start under the same condition
        if self.url_endpoint.is_empty() {
            return Err(
                "URL endpoint must not be empty. Set --url-endpoint or IMAGEKIT_URL_ENDPOINT"
                    .to_string(),
            );
        }

        // Validate the origin parses as a header value
        if self.allowed_origin.parse::<HeaderValue>().is_err() {
            return Err(format!(
                "allowed_origin is not a valid header value: {:?}",
                self.allowed_origin
            ));
        }

        // Validate token TTL (the upload API rejects expiries more than an
        // hour in the future)
        if self.token_ttl == 0 || self.token_ttl > MAX_TOKEN_TTL_SECS {
            return Err(format!(
                "token_ttl must be between 1 and {} seconds",
                MAX_TOKEN_TTL_SECS
            ));
        }

        // Validate body limit
        if self.body_limit == 0 {
            return Err("body_limit must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
