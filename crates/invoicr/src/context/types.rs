//! Types for request-scoped context.

use invoicr_client::ScopedClientFactory;
use invoicr_core::auth::{AuthClient, AuthUser};
use invoicr_core::factory::ClientFactory;
use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context for page handlers.
///
/// Complements `AppState` (application-scoped) with the caller's identity.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Backend client factory bound to the caller's token.
    pub client: ScopedClientFactory,
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
}

impl RequestContext {
    /// Resolves the caller.
    ///
    /// `Ok(None)` means anonymous (no token, or the auth service rejected
    /// it). Lookup failures are returned, never folded into `None`.
    pub async fn current_user(&self) -> anyhow::Result<Option<AuthUser>> {
        let client = self.client.create().await?;
        Ok(client.current_user().await?)
    }
}
