//! Short-lived IAM authentication tokens for managed cache services.
//!
//! Amazon ElastiCache and MemoryDB accept SigV4-signed requests as passwords:
//! instead of a static secret, the client proves identity with a signature
//! only the holder of valid credentials could have produced, and the service
//! re-derives the same signature to verify it. This crate builds that token.
//! A synthetic request is constructed, canonicalized, and signed; the signed
//! query string (or Authorization header value) is returned as an opaque
//! password valid for 900 seconds. Nothing is ever sent over the network.
//!
//! ## Example
//!
//! ```no_run
//! use elasticache_iam_auth::{SigningMode, TokenGenerator, SERVICE_ELASTICACHE};
//!
//! # async fn example() -> elasticache_iam_auth::Result<()> {
//! let generator = TokenGenerator::new(
//!     "us-east-1",
//!     "cache.amazonaws.com",
//!     SERVICE_ELASTICACHE,
//!     SigningMode::PresignedQuery {
//!         cluster_name: "my-replication-group".to_string(),
//!         username: "app-user".to_string(),
//!     },
//! )?;
//!
//! // Use the token as the password for the cache connection. It expires
//! // 900 seconds after generation; refresh scheduling is the caller's job.
//! let token = generator.generate().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Credentials are discovered from the ambient environment by default. Inject
//! a [`ProvideCredential`] implementation to resolve them differently, or a
//! [`StaticEnv`] context to keep tests deterministic.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{SERVICE_ELASTICACHE, SERVICE_MEMORYDB, TOKEN_VALIDITY_SECONDS};

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod hash;
mod time;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, ProvideCredential, ProvideCredentialChain,
    StaticCredentialProvider,
};

mod token;
pub use token::{SigningMode, TokenGenerator};
