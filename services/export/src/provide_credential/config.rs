use crate::{Config, Credential};
use async_trait::async_trait;
use exportsign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider serves the secret held by a shared [`Config`].
///
/// Useful when one `Config` instance (possibly filled from the environment
/// via [`Config::from_env`]) drives both the credential and the verifier
/// window.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match &self.config.secret {
            Some(secret) if !secret.is_empty() => Ok(Some(Credential::new(secret.clone()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_provider() -> Result<()> {
        let config = Arc::new(Config::new().with_secret("devsecret"));
        let provider = ConfigCredentialProvider::new(config);

        let cred = provider.provide_credential(&Context::new()).await?;
        assert_eq!(cred.unwrap().secret, "devsecret");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_provider_without_secret() -> Result<()> {
        let provider = ConfigCredentialProvider::new(Arc::new(Config::new()));

        let cred = provider.provide_credential(&Context::new()).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
