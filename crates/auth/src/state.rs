//! Application state for auth.

use std::sync::Arc;

use axum::extract::FromRef;
use invoicr_client::{ScopedClientFactory, SupabaseClient};
use invoicr_core::auth::AccessToken;

use crate::config::AuthConfig;

/// Shared state for auth handlers.
///
/// `client` is the process-wide anonymous handle. Per-request handles are
/// derived from it and never stored here.
#[derive(Clone)]
pub struct AuthState {
    pub client: Arc<SupabaseClient>,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(client: Arc<SupabaseClient>, config: AuthConfig) -> Self {
        Self { client, config }
    }

    /// A client factory bound to one request's access token.
    pub fn factory_for(&self, token: Option<AccessToken>) -> ScopedClientFactory {
        ScopedClientFactory::new(self.client.clone(), token)
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
