//! ImageKit service adapter.
//!
//! Two halves, matching the two things the service can do for us:
//!
//! - [`auth`]: local HMAC signing of upload parameter bundles. No network
//!   involved; the private key signs a token and expiry that the browser
//!   presents to the service directly.
//! - [`media`]: the REST Media API for file management, behind the
//!   [`MediaApi`] trait so handlers can run against a test double.

pub mod auth;
pub mod media;

pub use auth::{AuthParams, UploadAuth, DEFAULT_TOKEN_TTL};
pub use media::{ImageKitMediaApi, MediaApi, DEFAULT_API_BASE};
