use crate::Credential;
use async_trait::async_trait;
use exportsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider serves a secret handed over at construction.
///
/// Use this when the secret is already in hand, for example pulled from a
/// secret manager by the surrounding application, or in tests.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider() -> Result<()> {
        let provider = StaticCredentialProvider::new("devsecret");
        let cred = provider.provide_credential(&Context::new()).await?.unwrap();
        assert_eq!(cred.secret, "devsecret");
        Ok(())
    }
}
