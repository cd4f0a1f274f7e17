use std::fmt;
use thiserror::Error;

/// The error type for exportsign operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Credential is missing, empty or otherwise unusable
    CredentialInvalid,

    /// Request cannot be signed or verified (missing required fields, etc.)
    RequestInvalid,

    /// A required authentication header is absent from the request
    HeaderMissing,

    /// The timestamp header does not parse as a decimal integer
    TimestampMalformed,

    /// The claimed timestamp is outside the verification window
    TimestampStale,

    /// The supplied signature does not match the recomputed one
    SignatureMismatch,

    /// The transport collaborator failed to deliver the request
    TransportFailed,

    /// Unexpected errors (I/O, encoding, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error is a verifier-side rejection.
    ///
    /// Rejections map to a 401/403-class response; none of them should
    /// trigger a retry on its own.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::HeaderMissing
                | ErrorKind::TimestampMalformed
                | ErrorKind::TimestampStale
                | ErrorKind::SignatureMismatch
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a credential invalid error.
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a missing header error.
    pub fn header_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HeaderMissing, message)
    }

    /// Create a malformed timestamp error.
    pub fn timestamp_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TimestampMalformed, message)
    }

    /// Create a stale timestamp error.
    pub fn timestamp_stale(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TimestampStale, message)
    }

    /// Create a signature mismatch error.
    pub fn signature_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureMismatch, message)
    }

    /// Create a transport failed error.
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFailed, message)
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::HeaderMissing => write!(f, "missing authentication header"),
            ErrorKind::TimestampMalformed => write!(f, "malformed timestamp"),
            ErrorKind::TimestampStale => write!(f, "stale timestamp"),
            ErrorKind::SignatureMismatch => write!(f, "signature mismatch"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_grouped() {
        assert!(Error::header_missing("x-signature").is_rejection());
        assert!(Error::timestamp_malformed("not a number").is_rejection());
        assert!(Error::timestamp_stale("too old").is_rejection());
        assert!(Error::signature_mismatch("nope").is_rejection());

        assert!(!Error::credential_invalid("empty secret").is_rejection());
        assert!(!Error::transport_failed("connection refused").is_rejection());
    }

    #[test]
    fn test_kind_is_preserved() {
        let err = Error::timestamp_stale("drift of 301s exceeds window of 300s");
        assert_eq!(err.kind(), ErrorKind::TimestampStale);
        assert_eq!(err.to_string(), "drift of 301s exceeds window of 300s");
    }
}
