//! Decoding of backend error bodies.

use invoicr_core::auth::AuthError;
use invoicr_core::storage::QueryError;
use serde::Deserialize;

/// Error body of the auth API. Older deployments send
/// `{error, error_description}`, newer ones `{code, error_code, msg}`.
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

/// Builds an [`AuthError`] from a non-success auth API response.
pub fn parse_auth_error(status: u16, body: &str) -> AuthError {
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();

    let code = parsed.error_code.or_else(|| parsed.error.clone());
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| fallback_message(status, body));

    AuthError::Api {
        status,
        code,
        message,
    }
}

/// Builds a [`QueryError`] from a non-success data API response.
pub fn parse_query_error(status: u16, body: &str) -> QueryError {
    match serde_json::from_str::<QueryError>(body) {
        Ok(mut error) => {
            error.status = status;
            if error.message.is_empty() {
                error.message = fallback_message(status, body);
            }
            error
        }
        Err(_) => QueryError {
            status,
            code: None,
            message: fallback_message(status, body),
            details: None,
            hint: None,
        },
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        body.to_string()
    }
}
