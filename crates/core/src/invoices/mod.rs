//! Invoice rows as listed on the dashboard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::auth::AuthError;
use crate::factory::InitError;
use crate::storage::{Order, StorageError};

/// Table holding invoices.
pub const INVOICES_TABLE: &str = "invoices";

/// Dashboard listing order: newest first.
pub fn dashboard_order() -> Order {
    Order::desc("created_at")
}

/// An invoice row. Columns other than the owner key are carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub user_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Invoice {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Column rendered as display text; numbers are printed, null is absent.
    pub fn display(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Decodes raw rows into invoices.
pub fn decode_invoices(rows: Vec<Value>) -> Result<Vec<Invoice>, StorageError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| StorageError::Serialization(e.to_string()))
        })
        .collect()
}

/// Errors returned by the invoice accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("could not create backend client: {0}")]
    Client(#[from] InitError),

    #[error("could not resolve current user: {0}")]
    Auth(#[from] AuthError),

    #[error("invoice query failed: {0}")]
    Query(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_keeps_row_order_and_columns() {
        let rows = vec![
            json!({"user_id": "u-1", "id": 2, "invoice_number": "INV-002", "total": 120.5}),
            json!({"user_id": "u-1", "id": 1, "invoice_number": "INV-001", "total": null}),
        ];

        let invoices = decode_invoices(rows).unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].display("invoice_number").as_deref(), Some("INV-002"));
        assert_eq!(invoices[0].display("total").as_deref(), Some("120.5"));
        assert_eq!(invoices[1].display("total"), None);
    }

    #[test]
    fn decode_rejects_rows_without_owner() {
        let result = decode_invoices(vec![json!({"id": 1})]);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn dashboard_order_is_newest_first() {
        let order = dashboard_order();
        assert_eq!(order.column, "created_at");
        assert!(!order.ascending);
    }
}
