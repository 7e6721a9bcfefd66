//! Client error types.

use invoicr_core::auth::AuthError;
use invoicr_core::factory::InitError;
use invoicr_core::invoices::InvoiceError;
use invoicr_core::settings::SettingsError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the command-line client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Backend client unavailable: {0}")]
    Init(#[from] InitError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Invoices(#[from] InvoiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_display() {
        let error = ClientError::from(InitError::MissingConfig("SUPABASE_ANON_KEY"));
        assert_eq!(
            error.to_string(),
            "Backend client unavailable: missing configuration value: SUPABASE_ANON_KEY"
        );
    }

    #[test]
    fn settings_error_is_transparent() {
        let error = ClientError::from(SettingsError::Client(InitError::Build("tls".to_string())));
        assert_eq!(
            error.to_string(),
            "could not create backend client: failed to build client: tls"
        );
    }
}
