use crate::provide_credential::{
    EnvCredentialProvider, ProvideCredential, ProvideCredentialChain,
};
use crate::{Context, Credential, Result};
use async_trait::async_trait;

/// DefaultCredentialProvider discovers credentials from the ambient
/// environment.
///
/// Resolution order:
///
/// 1. Environment variables
///
/// Richer sources (shared config files, instance metadata, federation
/// endpoints) belong to the consuming application; wire them in through
/// [`ProvideCredentialChain`] via `with_chain`.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
