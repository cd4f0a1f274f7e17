use crate::{Context, ProvideCredential, Result, SigningCredential};
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Create a credential provider chain from a vector of providers.
    pub fn from_vec(providers: Vec<Box<dyn ProvideCredential<Credential = C>>>) -> Self {
        Self { providers }
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}");
                    // Continue to next provider on error
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct FixedProvider(Option<TestCredential>);

    #[async_trait::async_trait]
    impl ProvideCredential for FixedProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestCredential>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for FailingProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestCredential>> {
            Err(Error::unexpected("provider blew up"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_hit() {
        let chain = ProvideCredentialChain::new()
            .push(FixedProvider(None))
            .push(FixedProvider(Some(TestCredential("first".to_string()))))
            .push(FixedProvider(Some(TestCredential("second".to_string()))));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.0, "first");
    }

    #[tokio::test]
    async fn test_chain_skips_failing_provider() {
        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(FixedProvider(Some(TestCredential("fallback".to_string()))));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.0, "fallback");
    }

    #[tokio::test]
    async fn test_push_front_takes_priority() {
        let chain = ProvideCredentialChain::new()
            .push(FixedProvider(Some(TestCredential("base".to_string()))))
            .push_front(FixedProvider(Some(TestCredential("override".to_string()))));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.0, "override");
    }

    #[tokio::test]
    async fn test_empty_chain_yields_none() {
        let chain: ProvideCredentialChain<TestCredential> = ProvideCredentialChain::new();
        assert!(chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .is_none());
    }
}
