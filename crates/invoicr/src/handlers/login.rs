//! Login page handler.

use axum::{
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use invoicr_core::auth::validate_return_to;
use invoicr_core::seo::escape_html;
use serde::Deserialize;

use crate::{context::RequestContext, handlers::pages::DASHBOARD_PATH};

#[derive(Deserialize, Default)]
pub struct LoginQuery {
    pub return_to: Option<String>,
    /// Error code of a rejected sign-in attempt.
    pub error: Option<String>,
}

/// Handler for GET /login
///
/// - Unauthenticated: renders the sign-in form
/// - Authenticated: redirects to the invoices dashboard
pub async fn login_page(ctx: RequestContext, Query(query): Query<LoginQuery>) -> Response {
    match ctx.current_user().await {
        Ok(Some(_)) => return Redirect::to(DASHBOARD_PATH).into_response(),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(
                request_id = %ctx.request_id,
                error = %e,
                "User lookup failed, showing sign-in form"
            );
        }
    }

    let return_to = query
        .return_to
        .as_deref()
        .and_then(validate_return_to)
        .unwrap_or(DASHBOARD_PATH);
    let error = query.error.as_deref().map(sign_in_error_message);

    Html(render_login_html(return_to, error)).into_response()
}

/// User-facing text for a sign-in error code.
fn sign_in_error_message(code: &str) -> &'static str {
    match code {
        "invalid_credentials" | "invalid_grant" => "Invalid email or password.",
        "email_not_confirmed" => "Please confirm your email address before signing in.",
        "over_request_rate_limit" => "Too many attempts. Please wait a moment and try again.",
        _ => "Sign-in failed. Please try again.",
    }
}

/// Render the login page HTML.
///
/// The form posts to `/auth/login`, which sets the session cookie and
/// redirects to `return_to`.
fn render_login_html(return_to: &str, error: Option<&str>) -> String {
    let return_to = escape_html(return_to);
    let error = error
        .map(|message| {
            format!(
                r#"<p class="login-error" role="alert">{}</p>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sign in | Invoicr</title>
    <style>
        .login-page {{
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            padding: 2rem;
            background: #f5f5f5;
        }}
        .login-container {{
            background: #fff;
            border-radius: 12px;
            padding: 2.5rem;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            max-width: 400px;
            width: 100%;
        }}
        .login-form {{
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }}
    </style>
</head>
<body>
    <div class="login-page">
        <div class="login-container">
            <h1 class="login-title">Welcome back</h1>
            <p class="login-subtitle">Sign in to manage your invoices</p>
            {error}
            <form class="login-form" method="post" action="/auth/login">
                <input type="hidden" name="return_to" value="{return_to}">
                <label>Email <input type="email" name="email" autocomplete="email" required></label>
                <label>Password <input type="password" name="password" autocomplete="current-password" required></label>
                <button type="submit">Sign in</button>
            </form>
        </div>
    </div>
</body>
</html>"#
    )
}
