//! Auth API operations.

use async_trait::async_trait;
use invoicr_core::auth::{AuthClient, AuthError, AuthSession, AuthUser, Credentials, Result};
use reqwest::StatusCode;

use super::{parse_auth_error, SupabaseClient};

#[async_trait]
impl AuthClient for SupabaseClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthSession> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Password sign-in rejected");
            return Err(parse_auth_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        let Some(token) = &self.access_token else {
            return Ok(None);
        };

        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!(status = status.as_u16(), "Access token rejected, treating as anonymous");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_auth_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}
