//! Pure mapping from [`AuthError`] to HTTP status codes.

use super::AuthError;

/// Maps an [`AuthError`] to the HTTP status code a handler should answer with.
///
/// - `Api` -> the service's own 4xx status, or 502 for service-side failures
/// - `Transport` -> 503 (Service Unavailable)
/// - `InvalidResponse` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use invoicr_core::auth::{auth_error_to_status_code, AuthError};
///
/// let error = AuthError::Api {
///     status: 400,
///     code: Some("invalid_credentials".to_string()),
///     message: "Invalid login credentials".to_string(),
/// };
/// assert_eq!(auth_error_to_status_code(&error), 400);
/// ```
pub fn auth_error_to_status_code(error: &AuthError) -> u16 {
    match error {
        AuthError::Api { status, .. } if (400..500).contains(status) => *status,
        AuthError::Api { .. } => 502,
        AuthError::Transport(_) => 503,
        AuthError::InvalidResponse(_) => 502,
    }
}
