//! Connection settings for the hosted backend.

use invoicr_core::factory::InitError;
use url::Url;

/// Environment variable holding the service endpoint.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the public (anon) API key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Service endpoint and public API key.
#[derive(Clone)]
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Validates raw configuration values.
    ///
    /// # Errors
    ///
    /// `MissingConfig` when a value is absent or blank, `InvalidConfig` when
    /// the URL does not parse or is not http(s).
    pub fn from_values(url: Option<String>, anon_key: Option<String>) -> Result<Self, InitError> {
        let url = url
            .filter(|v| !v.trim().is_empty())
            .ok_or(InitError::MissingConfig(URL_VAR))?;
        let anon_key = anon_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(InitError::MissingConfig(ANON_KEY_VAR))?;

        let url = Url::parse(url.trim()).map_err(|e| InitError::InvalidConfig {
            key: URL_VAR,
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(InitError::InvalidConfig {
                key: URL_VAR,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            url,
            anon_key: anon_key.trim().to_string(),
        })
    }

    /// Load from environment variables.
    ///
    /// - `SUPABASE_URL`: service endpoint (required)
    /// - `SUPABASE_ANON_KEY`: public API key (required)
    pub fn from_env() -> Result<Self, InitError> {
        Self::from_values(std::env::var(URL_VAR).ok(), std::env::var(ANON_KEY_VAR).ok())
    }

    /// Absolute URL for a path under the service root.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}
