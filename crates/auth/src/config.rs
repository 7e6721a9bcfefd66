use url::Url;

use crate::error::AuthError;

/// Cookie holding the access token when none is configured.
pub const DEFAULT_COOKIE_NAME: &str = "invoicr-auth-token";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: Url,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Configuration for `base_url` with the default cookie settings.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: true,
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_BASE_URL`: Public URL of the application (default: `http://localhost:3000`)
    /// - `AUTH_COOKIE_NAME`: Name of the access token cookie (default: `invoicr-auth-token`)
    /// - `COOKIE_SECURE`: Whether to set secure flag on cookies (default: true)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if `APP_BASE_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_values(
            std::env::var("APP_BASE_URL").ok(),
            std::env::var("AUTH_COOKIE_NAME").ok(),
            std::env::var("COOKIE_SECURE").ok(),
        )
    }

    fn from_values(
        base_url: Option<String>,
        cookie_name: Option<String>,
        cookie_secure: Option<String>,
    ) -> Result<Self, AuthError> {
        let base_url = base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .parse::<Url>()
            .map_err(|e| AuthError::Config(format!("APP_BASE_URL: {e}")))?;

        let cookie_name = cookie_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

        let cookie_secure = cookie_secure
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Ok(Self {
            base_url,
            cookie_name,
            cookie_secure,
        })
    }
}
