//! Upload authentication parameters for direct browser uploads.
//!
//! ImageKit lets a browser upload straight to the service, without the image
//! passing through this server, as long as the upload request carries a
//! parameter bundle signed with the account's private key:
//!
//! ```text
//! signature = HMAC-SHA1(private_key, "{token}{expire}")
//! ```
//!
//! `token` is a fresh UUID per bundle and `expire` is a Unix timestamp
//! (seconds). The service rejects bundles whose expiry is more than an hour
//! out, and refuses to accept the same token twice. The private key never
//! leaves this process; clients only ever see the derived signature.
//!
//! # Example
//!
//! ```rust
//! use imagekit_proxy::imagekit::UploadAuth;
//!
//! let auth = UploadAuth::new("private_...");
//! let params = auth.generate();
//!
//! assert_eq!(params.signature.len(), 40); // hex-encoded SHA-1 output
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;
use uuid::Uuid;

// =============================================================================
// Types
// =============================================================================

/// HMAC-SHA1 type alias (the digest the upload API expects)
type HmacSha1 = Hmac<Sha1>;

/// Default validity window for upload tokens (30 minutes).
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// A signed parameter bundle authorizing one direct upload.
///
/// Serializes to the exact shape the upload widget consumes:
/// `{"token": ..., "expire": ..., "signature": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthParams {
    /// One-time upload token (UUID v4)
    pub token: String,

    /// Unix timestamp (seconds) after which the bundle is rejected
    pub expire: u64,

    /// Hex-encoded HMAC-SHA1 over token and expiry
    pub signature: String,
}

// =============================================================================
// Upload Authenticator
// =============================================================================

/// Generates signed upload parameter bundles from the account private key.
#[derive(Clone)]
pub struct UploadAuth {
    /// Private key bytes used for HMAC computation
    private_key: Vec<u8>,

    /// How long generated bundles stay valid
    token_ttl: Duration,
}

impl UploadAuth {
    /// Create a new authenticator with the given private key.
    ///
    /// Uses the default 30 minute token validity window.
    pub fn new(private_key: impl AsRef<[u8]>) -> Self {
        Self {
            private_key: private_key.as_ref().to_vec(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Set the validity window for generated bundles.
    ///
    /// The service caps expiries at one hour in the future; longer TTLs
    /// produce bundles the upload API will reject.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Generate a fresh parameter bundle.
    ///
    /// Each call draws a new random token, so no two bundles are alike.
    ///
    /// # Returns
    ///
    /// A bundle expiring `token_ttl` from now.
    pub fn generate(&self) -> AuthParams {
        let token = Uuid::new_v4().to_string();
        let expire = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + self.token_ttl.as_secs();

        self.generate_for(token, expire)
    }

    /// Generate a bundle for a specific token and expiry.
    ///
    /// This is the deterministic core of [`generate`](Self::generate); it is
    /// useful when the token and expiry come from elsewhere (tests, replay of
    /// a recorded bundle).
    pub fn generate_for(&self, token: impl Into<String>, expire: u64) -> AuthParams {
        let token = token.into();
        let signature = self.compute_signature(&token, expire);

        AuthParams {
            token,
            expire,
            signature,
        }
    }

    /// Compute the HMAC-SHA1 signature over a token and expiry.
    fn compute_signature(&self, token: &str, expire: u64) -> String {
        let mut mac =
            HmacSha1::new_from_slice(&self.private_key).expect("HMAC can take key of any size");
        mac.update(token.as_bytes());
        mac.update(expire.to_string().as_bytes());
        let result = mac.finalize();

        hex::encode(result.into_bytes())
    }
}

// =============================================================================
// Tests
// =============================================================================
