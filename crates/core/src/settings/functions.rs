use serde_json::Value;

use crate::storage::{Result, StorageError};

use super::UserSettings;

/// Interprets the outcome of a single-row settings query.
///
/// - a row decodes into `Some(settings)`
/// - the not-found signal becomes `None`
/// - anything else stays an error
pub fn classify_settings_row(result: Result<Value>) -> Result<Option<UserSettings>> {
    match result {
        Ok(row) => serde_json::from_value(row)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string())),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{QueryError, NOT_FOUND_CODE};
    use serde_json::json;

    #[test]
    fn row_becomes_settings() {
        let row = json!({"user_id": "u-1", "currency": "USD"});
        let settings = classify_settings_row(Ok(row)).unwrap().unwrap();
        assert_eq!(settings.user_id, "u-1");
        assert_eq!(settings.get_str("currency"), Some("USD"));
    }

    #[test]
    fn not_found_becomes_none() {
        let error = StorageError::Query(QueryError {
            status: 406,
            code: Some(NOT_FOUND_CODE.to_string()),
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
            details: Some("The result contains 0 rows".to_string()),
            hint: None,
        });
        assert_eq!(classify_settings_row(Err(error)), Ok(None));
    }

    #[test]
    fn duplicate_rows_stay_an_error() {
        let error = StorageError::Query(QueryError {
            status: 406,
            code: Some(NOT_FOUND_CODE.to_string()),
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
            details: Some("The result contains 2 rows".to_string()),
            hint: None,
        });
        assert_eq!(classify_settings_row(Err(error.clone())), Err(error));
    }

    #[test]
    fn row_without_owner_is_a_serialization_error() {
        let result = classify_settings_row(Ok(json!({"currency": "USD"})));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
