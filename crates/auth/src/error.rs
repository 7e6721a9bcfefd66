use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use invoicr_core::auth::auth_error_to_status_code;
use invoicr_core::factory::InitError;
use serde_json::json;
use thiserror::Error;

/// Auth errors for the invoicr_auth crate.
///
/// This wraps the core `AuthError` and adds the failures that only exist
/// once the routes run inside a server.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failure reported by (or while talking to) the auth service.
    #[error(transparent)]
    Core(#[from] invoicr_core::auth::AuthError),

    /// Backend client could not be built
    #[error(transparent)]
    Client(#[from] InitError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use invoicr_core::auth::AuthError as CoreError;

        let (status, code, message) = match &self {
            AuthError::Core(core_err @ CoreError::Api { status, .. })
                if (400..500).contains(status) =>
            {
                (
                    auth_error_to_status_code(core_err),
                    core_err.code().unwrap_or("auth_error").to_string(),
                    core_err.to_string(),
                )
            }
            AuthError::Core(core_err) => {
                tracing::error!(error = %core_err, "Auth service error");
                (
                    auth_error_to_status_code(core_err),
                    "auth_unavailable".to_string(),
                    "Authentication service unavailable".to_string(),
                )
            }
            AuthError::Client(_) | AuthError::Config(_) => {
                tracing::error!(error = %self, "Auth configuration error");
                (
                    500,
                    "configuration_error".to_string(),
                    "Server configuration error".to_string(),
                )
            }
        };

        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = json!({ "error": { "code": code, "message": message } });

        (status, Json(body)).into_response()
    }
}
