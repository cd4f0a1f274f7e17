use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the material both sides of the scheme hold.
///
/// Typically a shared secret. The signer and verifier only use credentials
/// that report themselves valid; anything else triggers a reload through the
/// configured [`ProvideCredential`].
pub trait SigningCredential: Clone + Debug + Send + Sync + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential loads the shared credential from the environment.
///
/// The secret is provisioned out-of-band (deployment config, secret
/// manager); implementations only decide where to read it from. Returning
/// `Ok(None)` means this source has nothing to offer and the next provider
/// in a chain may be tried.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential from the current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest computes and attaches authentication metadata to an outbound
/// request.
///
/// Implementations receive the request head and the exact body bytes that
/// will travel on the wire. Signing MUST happen over those final bytes; any
/// re-serialization after signing invalidates the signature.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Sign the request in place.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// VerifyRequest validates the authentication metadata of an inbound
/// request.
///
/// The counterpart of [`SignRequest`]: it recomputes the expected signature
/// from the request head and the body bytes exactly as received, and rejects
/// on any discrepancy. Implementations are stateless per request.
#[async_trait::async_trait]
pub trait VerifyRequest: Debug + Send + Sync + 'static {
    /// Credential used by this verifier.
    type Credential: SigningCredential;

    /// Verify the request, returning a rejection error on failure.
    async fn verify_request(
        &self,
        ctx: &Context,
        req: &http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
