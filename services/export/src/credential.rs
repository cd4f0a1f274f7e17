use std::fmt::{Debug, Formatter};

use exportsign_core::{utils::Redact, SigningCredential};

/// Credential for the export api: a single shared secret.
///
/// The secret is provisioned out-of-band and held by both sides of the
/// exchange. It is never transmitted, logged or serialized; rotating it
/// invalidates every signature made under the old value.
#[derive(Clone)]
pub struct Credential {
    /// The shared secret bytes, as configured.
    pub secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_invalid() {
        assert!(!Credential::new("").is_valid());
        assert!(Credential::new("devsecret").is_valid());
    }

    #[test]
    fn test_debug_never_prints_secret() {
        let printed = format!("{:?}", Credential::new("super-secret-value"));
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("***"));
    }
}
