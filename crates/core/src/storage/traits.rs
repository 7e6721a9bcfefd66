use async_trait::async_trait;
use serde_json::Value;

use super::{Filter, Order, Result};

/// Row-level access to the hosted data API.
///
/// Rows come back as raw JSON; typed decoding happens in the domain modules.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Fetches exactly one row matching `filter`.
    ///
    /// Zero or multiple matches surface as a [`QueryError`](super::QueryError)
    /// carrying [`NOT_FOUND_CODE`](super::NOT_FOUND_CODE).
    async fn select_single(&self, table: &str, filter: &Filter) -> Result<Value>;

    /// Fetches every row matching `filter`, optionally ordered.
    async fn select_many(
        &self,
        table: &str,
        filter: &Filter,
        order: Option<&Order>,
    ) -> Result<Vec<Value>>;
}
