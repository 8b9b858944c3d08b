//! Credential sources.
//!
//! The token generator never resolves credentials itself; it asks a
//! [`ProvideCredential`] implementation. The default wiring discovers
//! credentials from the ambient environment, and tests inject deterministic
//! providers instead.

use crate::{Context, Credential, Result};
use std::fmt::Debug;

mod chain;
pub use chain::ProvideCredentialChain;

mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod static_;
pub use static_::StaticCredentialProvider;

/// ProvideCredential is the trait used to retrieve credentials on demand.
///
/// Returning `Ok(None)` means this source is not configured; an `Err` means
/// the source exists but failed to supply credentials. Implementations must be
/// safe for concurrent retrieval, a requirement the generator passes through
/// rather than enforcing.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Retrieve credentials from this source.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>>;
}
