use async_trait::async_trait;
use http::HeaderValue;
use log::debug;

use crate::constants::*;
use crate::credential::Credential;
use exportsign_core::hash::hex_hmac_sha256;
use exportsign_core::time::{format_timestamp, now, DateTime};
use exportsign_core::{Context, Error, Result, SignRequest, SigningRequest};

/// RequestSigner that implements the export api shared-secret scheme.
///
/// For each request it stamps the current unix time into `x-timestamp`,
/// computes a lowercase-hex HMAC-SHA256 over
/// `method + path + body + timestamp` and attaches it as `x-signature`.
/// The body is signed exactly as it will be transmitted; the query string
/// and all existing headers pass through untouched.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new RequestSigner.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if cred.secret.is_empty() {
            return Err(Error::credential_invalid("secret is empty"));
        }

        let now = self.time.unwrap_or_else(now);
        let timestamp = format_timestamp(now);

        let mut ctx = SigningRequest::build(parts)?;
        if !ctx.path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path {:?} is not rooted at /",
                ctx.path
            )));
        }

        let canonical = canonical_string(ctx.method.as_str(), &ctx.path, body, &timestamp);
        let signature = hex_hmac_sha256(cred.secret.as_bytes(), &canonical);
        debug!("signed {} {} at {timestamp}", ctx.method, ctx.path);

        ctx.headers.insert(X_TIMESTAMP, timestamp.parse()?);
        ctx.headers.insert(X_SIGNATURE, {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });

        ctx.apply(parts)
    }
}

/// Construct the canonical byte string the signature covers.
///
/// ## Format
///
/// ```text
/// METHOD + PATH + BODY + TIMESTAMP
/// ```
///
/// Direct concatenation, no delimiters. Both sides must reproduce this
/// byte-for-byte or signatures will not interoperate, which is why the
/// verifier feeds the raw timestamp header string back in here rather than a
/// re-formatted integer.
pub(crate) fn canonical_string(method: &str, path: &str, body: &[u8], timestamp: &str) -> Vec<u8> {
    let mut payload =
        Vec::with_capacity(method.len() + path.len() + body.len() + timestamp.len());
    payload.extend_from_slice(method.as_bytes());
    payload.extend_from_slice(path.as_bytes());
    payload.extend_from_slice(body);
    payload.extend_from_slice(timestamp.as_bytes());

    payload
}
