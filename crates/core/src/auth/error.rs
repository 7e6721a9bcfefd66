use thiserror::Error;

/// Errors surfaced by the auth subsystem.
///
/// `Api` carries the service's own status and code untouched, so callers see
/// exactly what the auth service reported (bad credentials, unconfirmed email,
/// rate limiting, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("auth request failed: {0}")]
    Transport(String),

    #[error("invalid auth response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Machine-readable error code reported by the service, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
