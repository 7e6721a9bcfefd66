//! HTTP handlers for auth routes.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use invoicr_core::auth::{
    login, validate_return_to, AuthError as CoreAuthError, AuthSession, AuthUser, Credentials,
};
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::extractors::CurrentUser;
use crate::AuthState;

/// Page rendering the sign-in form.
const LOGIN_PAGE: &str = "/login";

/// Sign-in form fields.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// URL to redirect to after successful sign-in.
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Creates the auth router with all authentication routes.
///
/// Routes:
/// - `POST /auth/login` - Password sign-in (form body)
/// - `POST /auth/logout` - Clear the session cookie
/// - `GET /auth/me` - Get current authenticated user
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/auth/login", post(sign_in))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

/// Answers with the session as JSON, or with a redirect when the form names
/// a safe `return_to` path. The access token is also stored in an HttpOnly
/// cookie for browser navigation.
///
/// Rejected credentials from the HTML form (which always sends `return_to`)
/// go back to the login page with the service's error code.
async fn sign_in(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response), AuthError> {
    let credentials = Credentials::new(form.email, form.password);

    let session = match login(&*state.client, &credentials).await {
        Ok(session) => session,
        Err(e) => {
            tracing::info!(code = e.code(), error = %e, "Sign-in failed");
            if let Some(target) = form_error_redirect(form.return_to.as_deref(), &e) {
                return Ok((jar, Redirect::to(&target).into_response()));
            }
            return Err(e.into());
        }
    };

    tracing::info!(user_id = %session.user.id, "User signed in");

    let jar = jar.add(session_cookie(&state.config, &session));

    // Validate return_to URL to prevent open redirect attacks
    let response = match form.return_to.as_deref().and_then(validate_return_to) {
        Some(path) => Redirect::to(path).into_response(),
        None => Json(session).into_response(),
    };

    Ok((jar, response))
}

/// Login page URL carrying a rejected sign-in's error code.
///
/// Only client-side rejections are redirected; service failures keep their
/// error status.
fn form_error_redirect(return_to: Option<&str>, error: &CoreAuthError) -> Option<String> {
    let return_to = return_to?;
    if !matches!(error, CoreAuthError::Api { status, .. } if (400..500).contains(status)) {
        return None;
    }

    let code = error.code().unwrap_or("auth_error");
    let mut target = format!("{LOGIN_PAGE}?error={}", urlencoding::encode(code));
    if let Some(path) = validate_return_to(return_to) {
        target.push_str(&format!("&return_to={}", urlencoding::encode(path)));
    }
    Some(target)
}

fn session_cookie(config: &AuthConfig, session: &AuthSession) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session.access_token.clone()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(session.expires_in))
        .build()
}

async fn logout(State(state): State<AuthState>, jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((state.config.cookie_name.clone(), "")).path("/"))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<AuthUser> {
    Json(user)
}
