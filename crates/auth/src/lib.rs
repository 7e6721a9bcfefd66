//! Password sign-in and request identity for Invoicr.
//!
//! This crate provides:
//! - The sign-in, sign-out and current-user routes
//! - Session cookies carrying the auth service's access token
//! - Axum extractors that bind a backend client to the calling user

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{request_token, CurrentUser, RequestClient};
pub use handlers::{auth_routes, LoginForm};
pub use state::AuthState;
