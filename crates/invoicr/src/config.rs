use std::{env, time::Duration};

use invoicr_core::settings::SettingsErrorPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// How settings query failures reach callers (default: propagate)
    pub settings_errors: SettingsErrorPolicy,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SETTINGS_QUERY_ERRORS` - `propagate` or `ignore` (default: `propagate`)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SETTINGS_QUERY_ERRORS").ok(),
            env::var("REQUEST_TIMEOUT_SECONDS").ok(),
        )
    }

    fn from_values(settings_errors: Option<String>, request_timeout: Option<String>) -> Self {
        let settings_errors = match settings_errors {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unknown SETTINGS_QUERY_ERRORS value, using propagate");
                SettingsErrorPolicy::default()
            }),
            None => SettingsErrorPolicy::default(),
        };

        Self {
            settings_errors,
            request_timeout_seconds: request_timeout
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
