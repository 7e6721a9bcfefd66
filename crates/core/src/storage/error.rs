use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code the data API uses when a single-row request does not match
/// exactly one row.
pub const NOT_FOUND_CODE: &str = "PGRST116";

/// Error body reported by the data API for a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    /// HTTP status of the response that carried the error.
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl QueryError {
    /// Number of rows the failed single-row request actually matched, when the
    /// service reports it (e.g. `"The result contains 2 rows"`).
    pub fn row_count(&self) -> Option<usize> {
        let details = self.details.as_deref()?;
        let words: Vec<&str> = details.split_whitespace().collect();
        words.windows(2).find_map(|pair| {
            if pair[1].starts_with("row") {
                pair[0].parse().ok()
            } else {
                None
            }
        })
    }

    /// `true` when a single-row request legitimately matched zero rows.
    ///
    /// The same code is used for "more than one row"; that case is an
    /// integrity violation and is deliberately not classified as not-found.
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(NOT_FOUND_CODE)
            && self.row_count().is_none_or(|rows| rows == 0)
    }

    /// `true` when a single-row request matched more than one row.
    pub fn is_multiple_rows(&self) -> bool {
        self.code.as_deref() == Some(NOT_FOUND_CODE) && self.row_count().is_some_and(|n| n > 1)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for QueryError {}

/// Errors that can occur during data queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    Query(QueryError),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// `true` for the recognized "zero rows" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Query(e) if e.is_not_found())
    }
}

impl From<QueryError> for StorageError {
    fn from(error: QueryError) -> Self {
        Self::Query(error)
    }
}

/// Result type for data queries.
pub type Result<T> = std::result::Result<T, StorageError>;
