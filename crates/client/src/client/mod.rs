//! HTTP client for the hosted auth (GoTrue) and data (PostgREST) APIs.

mod auth;
mod responses;
mod rest;

#[cfg(test)]
pub(crate) mod test_support;

use std::{sync::Arc, time::Duration};

use invoicr_core::auth::AccessToken;
use invoicr_core::factory::InitError;

use crate::config::SupabaseConfig;

pub use responses::{parse_auth_error, parse_query_error};

/// Default timeout for a single backend request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the hosted backend.
///
/// Cloning is cheap: the connection pool and configuration are shared. An
/// optional access token binds the handle to one user; without one, requests
/// run with the public key only.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
    access_token: Option<AccessToken>,
}

impl SupabaseClient {
    /// Create a client without user identity.
    ///
    /// # Errors
    ///
    /// Returns `InitError::Build` if the HTTP client cannot be constructed.
    pub fn new(config: SupabaseConfig) -> Result<Self, InitError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("invoicr/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InitError::Build(e.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config),
            access_token: None,
        })
    }

    /// A new handle bound to `token`, sharing this client's connection pool.
    ///
    /// Passing `None` yields an anonymous handle.
    pub fn scoped(&self, token: Option<AccessToken>) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            access_token: token,
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    fn auth_url(&self, path: &str) -> String {
        self.config.endpoint(&format!("auth/v1/{path}"))
    }

    fn rest_url(&self, table: &str) -> String {
        self.config.endpoint(&format!("rest/v1/{table}"))
    }

    /// Token sent as `Authorization: Bearer`: the user's token when bound,
    /// the public key otherwise.
    fn bearer(&self) -> &str {
        self.access_token
            .as_ref()
            .map(AccessToken::as_str)
            .unwrap_or(&self.config.anon_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        let config = SupabaseConfig::from_values(
            Some("https://abc.supabase.co".to_string()),
            Some("anon-key".to_string()),
        )
        .unwrap();
        SupabaseClient::new(config).unwrap()
    }

    #[test]
    fn anonymous_client_uses_public_key_as_bearer() {
        let client = client();
        assert!(client.access_token().is_none());
        assert_eq!(client.bearer(), "anon-key");
    }

    #[test]
    fn scoped_client_uses_user_token() {
        let base = client();
        let scoped = base.scoped(Some(AccessToken::new("user-jwt")));
        assert_eq!(scoped.bearer(), "user-jwt");
        // The original handle is untouched.
        assert_eq!(base.bearer(), "anon-key");
    }

    #[test]
    fn urls_are_built_from_service_root() {
        let client = client();
        assert_eq!(client.auth_url("user"), "https://abc.supabase.co/auth/v1/user");
        assert_eq!(
            client.rest_url("user_settings"),
            "https://abc.supabase.co/rest/v1/user_settings"
        );
    }
}
