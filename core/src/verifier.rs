use crate::{Context, ProvideCredential, Result, SigningCredential, VerifyRequest};
use std::sync::{Arc, Mutex};

/// Verifier is the inbound counterpart of [`Signer`].
///
/// It resolves the shared credential the same way the signer does and
/// delegates the accept/reject decision to the [`VerifyRequest`]
/// implementation. The request is never mutated.
///
/// [`Signer`]: crate::Signer
#[derive(Clone, Debug)]
pub struct Verifier<C: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = C>>,
    checker: Arc<dyn VerifyRequest<Credential = C>>,
    credential: Arc<Mutex<Option<C>>>,
}

impl<C: SigningCredential> Verifier<C> {
    /// Create a new verifier.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = C>,
        checker: impl VerifyRequest<Credential = C>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            checker: Arc::new(checker),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Verify the request against the body bytes exactly as received.
    ///
    /// Returns `Ok(())` on acceptance. Rejections surface as errors whose
    /// kind satisfies [`Error::is_rejection`]; anything else is an
    /// operational failure, not a verdict on the request.
    ///
    /// [`Error::is_rejection`]: crate::Error::is_rejection
    pub async fn verify(&self, req: &http::request::Parts, body: &[u8]) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.checker
            .verify_request(&self.ctx, req, body, credential.as_ref())
            .await
    }
}
