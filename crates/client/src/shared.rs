//! Process-wide client handle.
//!
//! Long-lived processes (the CLI, the web server's anonymous calls) use one
//! client for their whole lifetime. It is built on first use from the
//! environment and never replaced.

use std::sync::Arc;

use invoicr_core::factory::InitError;
use once_cell::sync::OnceCell;

use crate::{SupabaseClient, SupabaseConfig};

/// Lazily initialized slot holding a single client.
///
/// A failed initialization leaves the slot empty, so a later call can still
/// succeed once configuration is fixed.
pub struct ClientCell {
    cell: OnceCell<Arc<SupabaseClient>>,
}

impl ClientCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached client, building it with `init` on first use.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<SupabaseClient>, InitError>
    where
        F: FnOnce() -> Result<SupabaseClient, InitError>,
    {
        self.cell.get_or_try_init(|| init().map(Arc::new)).cloned()
    }
}

impl Default for ClientCell {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: ClientCell = ClientCell::new();

/// The process-wide client.
///
/// Every successful call returns the same instance.
///
/// # Errors
///
/// Returns `InitError` when `SUPABASE_URL` or `SUPABASE_ANON_KEY` is missing
/// or invalid.
pub fn shared_client() -> Result<Arc<SupabaseClient>, InitError> {
    SHARED.get_or_try_init(|| {
        let config = SupabaseConfig::from_env()?;
        tracing::debug!(url = %config.url, "Creating shared backend client");
        SupabaseClient::new(config)
    })
}
