use async_trait::async_trait;

use super::{AuthError, AuthSession, AuthUser, Credentials};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Abstraction over the hosted auth service.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Exchange an email/password pair for a session.
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Resolve the user behind the client's current access token.
    ///
    /// Returns `None` when the client carries no token or the service rejects
    /// it as missing, invalid or expired.
    async fn current_user(&self) -> Result<Option<AuthUser>>;
}
