//! Axum extractors for request identity.
//!
//! The caller's access token comes from the `Authorization: Bearer` header
//! (API clients) or the session cookie (browsers), in that order.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
};
use axum_extra::extract::CookieJar;
use invoicr_client::ScopedClientFactory;
use invoicr_core::auth::{
    auth_error_to_status_code, parse_bearer, AccessToken, AuthClient, AuthUser,
};

use crate::AuthState;

/// Reads the caller's access token from the request headers.
pub fn request_token(headers: &HeaderMap, cookie_name: &str) -> Option<AccessToken> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer);

    if let Some(token) = from_header {
        return Some(AccessToken::new(token));
    }

    let jar = CookieJar::from_headers(headers);
    jar.get(cookie_name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .map(AccessToken::new)
}

/// Extractor for a client factory bound to the calling user.
///
/// Never rejects: requests without a token get an anonymous factory.
pub struct RequestClient(pub ScopedClientFactory);

impl<S> FromRequestParts<S> for RequestClient
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let token = request_token(&parts.headers, &auth_state.config.cookie_name);
        Ok(RequestClient(auth_state.factory_for(token)))
    }
}

/// Extractor for authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub AuthUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = request_token(&parts.headers, &auth_state.config.cookie_name)
            .ok_or((StatusCode::UNAUTHORIZED, "Not signed in"))?;

        let client = auth_state.client.scoped(Some(token));
        match client.current_user().await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err((StatusCode::UNAUTHORIZED, "Session expired or invalid")),
            Err(e) => {
                tracing::warn!(error = %e, "User lookup failed");
                let status = StatusCode::from_u16(auth_error_to_status_code(&e))
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                Err((status, "User lookup failed"))
            }
        }
    }
}
