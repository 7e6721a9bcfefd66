use super::{AuthClient, AuthSession, Credentials, Result};

/// Sign a user in with email and password.
///
/// Straight delegation: the auth service's answer (session or structured
/// failure) is returned as-is.
pub async fn login(client: &dyn AuthClient, credentials: &Credentials) -> Result<AuthSession> {
    client.sign_in_with_password(credentials).await
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
