//! Request-scoped client construction.

use std::sync::Arc;

use async_trait::async_trait;
use invoicr_core::auth::AccessToken;
use invoicr_core::factory::{ClientFactory, InitError};

use crate::SupabaseClient;

/// Builds a fresh handle per call, bound to one caller's token.
///
/// Handles share the base client's connection pool and nothing else, so one
/// request's identity can never leak into another.
#[derive(Debug, Clone)]
pub struct ScopedClientFactory {
    base: Arc<SupabaseClient>,
    token: Option<AccessToken>,
}

impl ScopedClientFactory {
    pub fn new(base: Arc<SupabaseClient>, token: Option<AccessToken>) -> Self {
        Self { base, token }
    }
}

#[async_trait]
impl ClientFactory for ScopedClientFactory {
    type Client = SupabaseClient;

    async fn create(&self) -> Result<SupabaseClient, InitError> {
        Ok(self.base.scoped(self.token.clone()))
    }
}
