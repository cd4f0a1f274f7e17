//! Shows how another service would securely call the export api.

use anyhow::Result;
use bytes::Bytes;
use exportsign_core::{Context, Signer};
use exportsign_export::{RequestSigner, StaticCredentialProvider};
use exportsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // The shared secret is provisioned out-of-band; "devsecret" matches the
    // server's local development default.
    let secret = std::env::var("EXPORT_API_SECRET").unwrap_or_else(|_| "devsecret".to_string());
    let url = "http://localhost:8080/export";

    // Serialize the payload first: the signature covers these exact bytes.
    let body = serde_json::to_vec(&serde_json::json!({
        "query": "SELECT * FROM users LIMIT 10",
        "email": "admin@example.com",
        "format": "json",
    }))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(secret),
        RequestSigner::new(),
    );

    let req = http::Request::post(url)
        .header("content-type", "application/json")
        .body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts, &body).await?;

    let req = http::Request::from_parts(parts, Bytes::from(body));
    let resp = ctx.http_send_as_string(req).await?;

    println!("Status: {}", resp.status());
    println!("Response: {}", resp.body());

    Ok(())
}
