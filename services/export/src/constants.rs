// Headers used by the export api scheme.
pub const X_TIMESTAMP: &str = "x-timestamp";
pub const X_SIGNATURE: &str = "x-signature";

// Env values used by the export api scheme.
pub const EXPORT_API_SECRET: &str = "EXPORT_API_SECRET";
pub const EXPORT_API_SIGNING_WINDOW: &str = "EXPORT_API_SIGNING_WINDOW";
