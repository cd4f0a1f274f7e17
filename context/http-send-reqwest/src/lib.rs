//! HttpSend implementation backed by [`reqwest`].
//!
//! Transport failures surface as [`ErrorKind::TransportFailed`] with the
//! underlying `reqwest` error attached as source; the caller decides whether
//! to retry. The signed request is sent exactly as built — nothing here
//! touches the body or the authentication headers.
//!
//! [`ErrorKind::TransportFailed`]: exportsign_core::ErrorKind::TransportFailed

#![warn(missing_docs)]

use async_trait::async_trait;
use bytes::Bytes;
use exportsign_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// HttpSend backed by a shared [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("request is not sendable").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
