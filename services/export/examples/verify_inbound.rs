//! Shows the server side of the scheme: verifying an inbound request.
//!
//! A real deployment calls `Verifier::verify` from its request handler with
//! the method, path, raw body and headers exactly as received, and maps a
//! rejection to a 401 response.

use anyhow::Result;
use exportsign_core::{Context, Signer, Verifier};
use exportsign_export::{RequestSigner, RequestVerifier, StaticCredentialProvider};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new();
    let body = br#"{"query":"SELECT 1","email":"a@b.com","format":"json"}"#;

    // Client side: sign the outbound request.
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new("devsecret"),
        RequestSigner::new(),
    );
    let req = http::Request::post("http://localhost:8080/export").body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts, body).await?;

    println!(
        "X-Timestamp: {}",
        parts.headers.get("x-timestamp").unwrap().to_str()?
    );
    println!(
        "X-Signature: {}",
        parts.headers.get("x-signature").unwrap().to_str()?
    );

    // Server side: verify it with the same shared secret.
    let verifier = Verifier::new(
        ctx,
        StaticCredentialProvider::new("devsecret"),
        RequestVerifier::new(),
    );

    match verifier.verify(&parts, body).await {
        Ok(()) => println!("verdict: accepted"),
        Err(e) if e.is_rejection() => println!("verdict: rejected ({e})"),
        Err(e) => return Err(e.into()),
    }

    // A tampered body fails with a signature mismatch.
    let tampered = br#"{"query":"SELECT 2","email":"a@b.com","format":"json"}"#;
    let verifier = Verifier::new(
        Context::new(),
        StaticCredentialProvider::new("devsecret"),
        RequestVerifier::new(),
    );
    match verifier.verify(&parts, tampered).await {
        Ok(()) => println!("tampered verdict: accepted (unexpected!)"),
        Err(e) => println!("tampered verdict: rejected ({e})"),
    }

    Ok(())
}
