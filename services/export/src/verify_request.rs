use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::config::Config;
use crate::constants::*;
use crate::credential::Credential;
use crate::sign_request::canonical_string;
use exportsign_core::hash::{constant_time_eq, hex_hmac_sha256};
use exportsign_core::time::{now, parse_timestamp, DateTime};
use exportsign_core::{Context, Error, Result, VerifyRequest};

/// Default verification window: claimed timestamps may drift up to five
/// minutes from the verifier's clock in either direction.
pub const DEFAULT_SIGNING_WINDOW: Duration = Duration::from_secs(300);

/// RequestVerifier, the inbound counterpart of [`RequestSigner`].
///
/// Recomputes the expected signature from the request exactly as received
/// and rejects on missing headers, malformed or stale timestamps, or a
/// signature mismatch. Comparison is constant-time. Stateless per request:
/// replay within the window is not detected, the window only bounds it.
///
/// [`RequestSigner`]: crate::RequestSigner
#[derive(Debug)]
pub struct RequestVerifier {
    window: Duration,
    time: Option<DateTime>,
}

impl Default for RequestVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestVerifier {
    /// Create a new RequestVerifier with the default window.
    pub fn new() -> Self {
        Self {
            window: DEFAULT_SIGNING_WINDOW,
            time: None,
        }
    }

    /// Specify the verification window.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Create a RequestVerifier from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            window: config.signing_window.unwrap_or(DEFAULT_SIGNING_WINDOW),
            time: None,
        }
    }

    /// Specify the verification time.
    ///
    /// # Note
    ///
    /// We should always take current time to verify requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl VerifyRequest for RequestVerifier {
    type Credential = Credential;

    async fn verify_request(
        &self,
        _ctx: &Context,
        parts: &http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if cred.secret.is_empty() {
            return Err(Error::credential_invalid("secret is empty"));
        }

        let timestamp = parts
            .headers
            .get(X_TIMESTAMP)
            .ok_or_else(|| Error::header_missing("x-timestamp header is required"))?;
        let signature = parts
            .headers
            .get(X_SIGNATURE)
            .ok_or_else(|| Error::header_missing("x-signature header is required"))?;

        // The raw header string feeds the canonical bytes below; parsing is
        // only for the freshness check.
        let timestamp = timestamp.to_str().map_err(|e| {
            Error::timestamp_malformed("timestamp header is not valid ascii").with_source(e)
        })?;
        let signature = signature.to_str()?;
        let claimed = parse_timestamp(timestamp)?;

        let now = self.time.unwrap_or_else(now).timestamp();
        let window = self.window.as_secs();
        if now.abs_diff(claimed) > window {
            debug!(
                "rejecting {} {}: timestamp drift exceeds {window}s",
                parts.method,
                parts.uri.path()
            );
            return Err(Error::timestamp_stale(format!(
                "timestamp outside the {window}s window"
            )));
        }

        let canonical = canonical_string(parts.method.as_str(), parts.uri.path(), body, timestamp);
        let expected = hex_hmac_sha256(cred.secret.as_bytes(), &canonical);

        if !constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            debug!(
                "rejecting {} {}: signature mismatch",
                parts.method,
                parts.uri.path()
            );
            return Err(Error::signature_mismatch("request signature does not match"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exportsign_core::ErrorKind;

    const SECRET: &str = "devsecret";
    const BODY: &[u8] = br#"{"query":"SELECT 1","email":"a@b.com","format":"json"}"#;
    const GOLDEN: &str = "eb45f35453ad53b4d3e15ee8639ceac7db4b92a06070dcbfc359edff9578af83";

    fn fixed_time(unix: i64) -> DateTime {
        DateTime::from_timestamp(unix, 0).unwrap()
    }

    fn inbound_parts(
        method: &str,
        path: &str,
        timestamp: &str,
        signature: &str,
    ) -> http::request::Parts {
        let mut builder = http::Request::builder().method(method).uri(path);
        if !timestamp.is_empty() {
            builder = builder.header(X_TIMESTAMP, timestamp);
        }
        if !signature.is_empty() {
            builder = builder.header(X_SIGNATURE, signature);
        }
        builder.body(()).unwrap().into_parts().0
    }

    async fn verify(
        verifier: RequestVerifier,
        parts: &http::request::Parts,
        body: &[u8],
    ) -> Result<()> {
        verifier
            .verify_request(
                &Context::new(),
                parts,
                body,
                Some(&Credential::new(SECRET)),
            )
            .await
    }

    #[tokio::test]
    async fn test_accepts_golden_vector() -> Result<()> {
        let parts = inbound_parts("POST", "/export", "1700000000", GOLDEN);
        let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));

        verify(verifier, &parts, BODY).await
    }

    #[tokio::test]
    async fn test_accepts_empty_body() -> Result<()> {
        let parts = inbound_parts(
            "POST",
            "/export",
            "1700000000",
            "0942304bc6fca72fd2805ccc3d192ff87eb0b696f5315a6eb6fd4ead7b1a3d34",
        );
        let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));

        verify(verifier, &parts, b"").await
    }

    #[tokio::test]
    async fn test_window_boundary_is_inclusive() {
        // Exactly window seconds of drift, both directions: accepted.
        for now in [1700000000 - 300, 1700000000 + 300] {
            let parts = inbound_parts("POST", "/export", "1700000000", GOLDEN);
            let verifier = RequestVerifier::new().with_time(fixed_time(now));
            assert!(verify(verifier, &parts, BODY).await.is_ok(), "now: {now}");
        }

        // One second beyond: rejected as stale.
        for now in [1700000000 - 301, 1700000000 + 301] {
            let parts = inbound_parts("POST", "/export", "1700000000", GOLDEN);
            let verifier = RequestVerifier::new().with_time(fixed_time(now));
            let err = verify(verifier, &parts, BODY).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TimestampStale, "now: {now}");
            assert!(err.is_rejection());
        }
    }

    #[tokio::test]
    async fn test_missing_headers() {
        let cases = [
            inbound_parts("POST", "/export", "", GOLDEN),
            inbound_parts("POST", "/export", "1700000000", ""),
        ];

        for parts in cases {
            let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));
            let err = verify(verifier, &parts, BODY).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::HeaderMissing);
        }
    }

    #[tokio::test]
    async fn test_malformed_timestamp() {
        for timestamp in ["17e9", "1700000000.5", "soon", "1700 "] {
            let parts = inbound_parts("POST", "/export", timestamp, GOLDEN);
            let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));
            let err = verify(verifier, &parts, BODY).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TimestampMalformed, "ts: {timestamp:?}");
        }
    }

    #[tokio::test]
    async fn test_tampering_is_detected() {
        // Each case alters exactly one signed component after signing.
        let tampered: Vec<(http::request::Parts, &[u8])> = vec![
            (inbound_parts("GET", "/export", "1700000000", GOLDEN), BODY),
            (inbound_parts("POST", "/exports", "1700000000", GOLDEN), BODY),
            (
                inbound_parts("POST", "/export", "1700000001", GOLDEN),
                BODY,
            ),
            (
                inbound_parts("POST", "/export", "1700000000", GOLDEN),
                br#"{"query":"SELECT 2","email":"a@b.com","format":"json"}"#,
            ),
        ];

        for (parts, body) in tampered {
            let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));
            let err = verify(verifier, &parts, body).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
            assert!(err.is_rejection());
        }
    }

    #[tokio::test]
    async fn test_raw_timestamp_string_is_canonical() -> Result<()> {
        // A parsable-but-unusual representation must verify against the raw
        // bytes the client actually signed, not a re-formatted integer.
        let raw = "0001700000000";
        let canonical = canonical_string("POST", "/export", BODY, raw);
        let signature = hex_hmac_sha256(SECRET.as_bytes(), &canonical);

        let parts = inbound_parts("POST", "/export", raw, &signature);
        let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));

        verify(verifier, &parts, BODY).await
    }

    #[tokio::test]
    async fn test_rejects_missing_credential() {
        let parts = inbound_parts("POST", "/export", "1700000000", GOLDEN);
        let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));

        let err = verifier
            .verify_request(&Context::new(), &parts, BODY, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(!err.is_rejection());
    }

    #[tokio::test]
    async fn test_extreme_timestamps_do_not_panic() {
        for timestamp in ["-9223372036854775808", "9223372036854775807"] {
            let parts = inbound_parts("POST", "/export", timestamp, GOLDEN);
            let verifier = RequestVerifier::new().with_time(fixed_time(1700000000));
            let err = verify(verifier, &parts, BODY).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TimestampStale, "ts: {timestamp}");
        }
    }

    #[tokio::test]
    async fn test_custom_window() {
        let parts = inbound_parts("POST", "/export", "1700000000", GOLDEN);
        let verifier = RequestVerifier::new()
            .with_window(Duration::from_secs(10))
            .with_time(fixed_time(1700000011));

        let err = verify(verifier, &parts, BODY).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TimestampStale);
    }
}
