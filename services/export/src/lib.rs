//! Shared-secret HMAC signing and verification for the export api.
//!
//! A calling service authenticates each request with two headers:
//! `x-timestamp` (unix seconds) and `x-signature` (lowercase-hex HMAC-SHA256
//! over `method + path + body + timestamp`). The server recomputes the
//! signature from the request exactly as received, enforces a freshness
//! window, and compares in constant time.
//!
//! ```no_run
//! use exportsign_core::{Context, Signer};
//! use exportsign_export::{RequestSigner, StaticCredentialProvider};
//!
//! # async fn example() -> exportsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("devsecret"),
//!     RequestSigner::new(),
//! );
//!
//! let body = br#"{"query":"SELECT 1","format":"json"}"#;
//! let req = http::Request::post("https://api.example.com/export").body(())?;
//! let (mut parts, _) = req.into_parts();
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod verify_request;
pub use verify_request::{RequestVerifier, DEFAULT_SIGNING_WINDOW};

mod constants;
