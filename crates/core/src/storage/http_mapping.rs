//! Pure functions for mapping storage errors to HTTP status codes.

use super::StorageError;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `Query` not-found -> 404 (Not Found)
/// - `Query` with a 4xx status -> that status
/// - `Query` otherwise -> 502 (Bad Gateway)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use invoicr_core::storage::{storage_error_to_status_code, StorageError};
///
/// let error = StorageError::ConnectionFailed("refused".to_string());
/// assert_eq!(storage_error_to_status_code(&error), 503);
/// ```
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::Query(e) if e.is_not_found() => 404,
        StorageError::Query(e) if (400..500).contains(&e.status) => e.status,
        StorageError::Query(_) => 502,
        StorageError::ConnectionFailed(_) => 503,
        StorageError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{QueryError, NOT_FOUND_CODE};

    fn query(status: u16, code: Option<&str>) -> StorageError {
        StorageError::Query(QueryError {
            status,
            code: code.map(String::from),
            message: "failed".to_string(),
            details: None,
            hint: None,
        })
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(storage_error_to_status_code(&query(406, Some(NOT_FOUND_CODE))), 404);
    }

    #[test]
    fn client_side_query_error_keeps_status() {
        assert_eq!(storage_error_to_status_code(&query(401, Some("42501"))), 401);
    }

    #[test]
    fn server_side_query_error_maps_to_502() {
        assert_eq!(storage_error_to_status_code(&query(500, None)), 502);
    }

    #[test]
    fn connection_failed_maps_to_503() {
        let error = StorageError::ConnectionFailed("dns".to_string());
        assert_eq!(storage_error_to_status_code(&error), 503);
    }

    #[test]
    fn serialization_maps_to_500() {
        let error = StorageError::Serialization("missing field `user_id`".to_string());
        assert_eq!(storage_error_to_status_code(&error), 500);
    }
}
