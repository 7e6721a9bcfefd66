use std::sync::Arc;

use invoicr_auth::{AuthConfig, AuthState};
use invoicr_client::services::{InvoiceService, SettingsService};
use invoicr_client::{ScopedClientFactory, SupabaseClient};

use crate::config::Config;

/// Application state shared across all handlers.
///
/// Holds only process-wide values. Anything bound to a user is built per
/// request from a [`ScopedClientFactory`].
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub config: Config,
}

impl AppState {
    pub fn new(client: Arc<SupabaseClient>, auth_config: AuthConfig, config: Config) -> Self {
        Self {
            auth: AuthState::new(client, auth_config),
            config,
        }
    }

    /// Settings accessor for one request, honoring the configured error policy.
    pub fn settings(&self, factory: ScopedClientFactory) -> SettingsService<ScopedClientFactory> {
        SettingsService::new(factory).with_policy(self.config.settings_errors)
    }

    /// Invoice accessor for one request.
    pub fn invoices(&self, factory: ScopedClientFactory) -> InvoiceService<ScopedClientFactory> {
        InvoiceService::new(factory)
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}
