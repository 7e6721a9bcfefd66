//! Request-scoped client construction.
//!
//! Server code never shares a user-bound client across requests; it asks a
//! [`ClientFactory`] for a fresh handle instead. Injecting the factory keeps
//! the identity source (cookies, headers) out of the services that use it.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::AuthClient;
use crate::storage::DataClient;

/// Failure to build a backend client handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("failed to build client: {0}")]
    Build(String),
}

/// Produces backend client handles bound to the caller's identity.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    type Client: AuthClient + DataClient;

    /// Builds a new handle. Each call yields an independent client.
    async fn create(&self) -> Result<Self::Client, InitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_display() {
        assert_eq!(
            InitError::MissingConfig("SUPABASE_URL").to_string(),
            "missing configuration value: SUPABASE_URL"
        );
        assert_eq!(
            InitError::InvalidConfig {
                key: "SUPABASE_URL",
                reason: "relative URL without a base".to_string(),
            }
            .to_string(),
            "invalid configuration value for SUPABASE_URL: relative URL without a base"
        );
    }
}
