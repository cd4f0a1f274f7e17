//! Generates a fresh shared secret suitable for EXPORT_API_SECRET.

use rand::RngCore;

fn main() {
    // 32 bytes of secure random data (256 bits), hex encoded.
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    let secret = hex::encode(bytes);

    println!("=== New Secure Secret Generated ===");
    println!("{secret}");
    println!("=====================================");
    println!("1. Copy this secret to your .env or Secret Manager (EXPORT_API_SECRET=...)");
    println!("2. Provide this secret to the client service via a SECURE channel.");
    println!("3. DO NOT share this over Slack or Email without encryption.");
}
