use crate::{constants::*, Credential};
use async_trait::async_trait;
use exportsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the shared secret from environment variables.
///
/// This provider looks for the following environment variable:
/// - `EXPORT_API_SECRET`: the shared secret for request signing
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match ctx.env_var(EXPORT_API_SECRET) {
            Some(secret) if !secret.is_empty() => Ok(Some(Credential::new(secret))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exportsign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(EXPORT_API_SECRET.to_string(), "devsecret".to_string())]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?;
        assert_eq!(cred.unwrap().secret, "devsecret");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing() -> Result<()> {
        let ctx = Context::new();

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_empty_value() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(EXPORT_API_SECRET.to_string(), "".to_string())]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
