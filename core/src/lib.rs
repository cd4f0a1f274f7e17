//! Core components for signing and verifying API requests.
//!
//! This crate provides the foundational types and traits for the exportsign
//! ecosystem: a shared-secret HMAC scheme has a signing side and a verifying
//! side, and both are expressed here as small pluggable traits.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: a container holding the transport (`HttpSend`) and
//!   environment (`Env`) collaborators
//! - **Traits**: `ProvideCredential` for loading the shared secret,
//!   `SignRequest` for the outbound side, `VerifyRequest` for the inbound side
//! - **Orchestrators**: [`Signer`] and [`Verifier`] coordinate credential
//!   loading with the scheme implementation
//!
//! ## Example
//!
//! ```no_run
//! use exportsign_core::{
//!     Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//! };
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-shared-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement the signing scheme
//! #[derive(Debug)]
//! struct MyScheme;
//!
//! #[async_trait]
//! impl SignRequest for MyScheme {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _req: &mut http::request::Parts,
//!         _body: &[u8],
//!         _credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         // Compute and attach your authentication headers here
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::default();
//! let signer = Signer::new(ctx, MyLoader, MyScheme);
//!
//! let mut parts = http::Request::builder()
//!     .method("POST")
//!     .uri("https://example.com/export")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, b"{}").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 helpers and constant-time comparison
//! - [`time`]: clock access and the unix-timestamp wire format
//! - [`utils`]: data redaction for Debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential, VerifyRequest};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
mod verifier;
pub use verifier::Verifier;
