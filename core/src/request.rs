use std::mem;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;
use std::str::FromStr;

use crate::{Error, Result};

/// Signing context for an outbound request.
///
/// Takes the pieces a signer needs out of `http::request::Parts`, and puts
/// them back — including a byte-identical query string — once the
/// authentication headers are in place. The query is never part of the
/// canonical string, but it must survive the round trip untouched.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// Raw query string, if any. Carried verbatim.
    pub query: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq.query().map(|v| v.to_string()),

            // Take the headers out of the request to avoid copy.
            // We will return them when the context is applied.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let paq = match self.query {
                    None => self.path,
                    Some(query) => {
                        let mut s = self.path;
                        s.reserve(query.len() + 1);
                        s.push('?');
                        s.push_str(&query);
                        s
                    }
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_apply_round_trip() {
        let req = http::Request::post("https://api.example.com/export?format=json&dry_run")
            .body(())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let mut ctx = SigningRequest::build(&mut parts).unwrap();
        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path, "/export");
        assert_eq!(ctx.query.as_deref(), Some("format=json&dry_run"));

        ctx.headers.insert("x-timestamp", "1700000000".parse().unwrap());
        ctx.apply(&mut parts).unwrap();

        assert_eq!(
            parts.uri.to_string(),
            "https://api.example.com/export?format=json&dry_run"
        );
        assert_eq!(parts.headers.get("x-timestamp").unwrap(), "1700000000");
    }

    #[test]
    fn test_build_defaults_empty_path_to_root() {
        let req = http::Request::get("http://api.example.com").body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let ctx = SigningRequest::build(&mut parts).unwrap();
        assert_eq!(ctx.path, "/");
        assert!(ctx.query.is_none());
    }

    #[test]
    fn test_build_rejects_missing_authority() {
        let req = http::Request::get("/export").body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let err = SigningRequest::build(&mut parts).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }
}
