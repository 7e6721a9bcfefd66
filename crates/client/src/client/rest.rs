//! Data API operations.

use async_trait::async_trait;
use invoicr_core::storage::{
    select_query_pairs, DataClient, Filter, Order, Result, StorageError,
};
use serde_json::Value;

use super::{parse_query_error, SupabaseClient};

/// Media type asking the data API for a single JSON object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

impl SupabaseClient {
    async fn select(
        &self,
        table: &str,
        filter: &Filter,
        order: Option<&Order>,
        accept: &str,
    ) -> Result<Value> {
        let response = self
            .http
            .get(self.rest_url(table))
            .query(&select_query_pairs(filter, order))
            .header("apikey", &self.config.anon_key)
            .header(reqwest::header::ACCEPT, accept)
            .bearer_auth(self.bearer())
            .send()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        if !status.is_success() {
            let error = parse_query_error(status.as_u16(), &body);
            tracing::debug!(table, status = status.as_u16(), error = %error, "Query rejected");
            return Err(StorageError::Query(error));
        }

        serde_json::from_str(&body).map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl DataClient for SupabaseClient {
    async fn select_single(&self, table: &str, filter: &Filter) -> Result<Value> {
        self.select(table, filter, None, SINGLE_OBJECT).await
    }

    async fn select_many(
        &self,
        table: &str,
        filter: &Filter,
        order: Option<&Order>,
    ) -> Result<Vec<Value>> {
        match self.select(table, filter, order, "application/json").await? {
            Value::Array(rows) => Ok(rows),
            other => Err(StorageError::Serialization(format!(
                "expected an array of rows, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{client_for, spawn_stub};
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use invoicr_core::auth::AccessToken;
    use serde_json::json;
    use std::collections::HashMap;

    /// Mimics the data API for `user_settings` and `invoices` with two users.
    fn stub_routes() -> Router {
        Router::new()
            .route(
                "/rest/v1/user_settings",
                get(
                    |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                        assert_eq!(headers["accept"], SINGLE_OBJECT);
                        assert_eq!(params.get("select").map(String::as_str), Some("*"));
                        match params.get("user_id").map(String::as_str) {
                            Some("eq.with-row") => (
                                StatusCode::OK,
                                Json(json!({"user_id": "with-row", "company_name": "Acme"})),
                            ),
                            Some("eq.duplicated") => (
                                StatusCode::NOT_ACCEPTABLE,
                                Json(json!({
                                    "code": "PGRST116",
                                    "details": "The result contains 2 rows",
                                    "hint": null,
                                    "message": "JSON object requested, multiple (or no) rows returned"
                                })),
                            ),
                            Some("eq.forbidden") => (
                                StatusCode::UNAUTHORIZED,
                                Json(json!({
                                    "code": "42501",
                                    "details": null,
                                    "hint": null,
                                    "message": "permission denied for table user_settings"
                                })),
                            ),
                            _ => (
                                StatusCode::NOT_ACCEPTABLE,
                                Json(json!({
                                    "code": "PGRST116",
                                    "details": "The result contains 0 rows",
                                    "hint": null,
                                    "message": "JSON object requested, multiple (or no) rows returned"
                                })),
                            ),
                        }
                    },
                ),
            )
            .route(
                "/rest/v1/invoices",
                get(
                    |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                        let auth = headers["authorization"].to_str().unwrap().to_string();
                        Json(json!([{
                            "user_id": "u-1",
                            "id": 7,
                            "order": params.get("order"),
                            "auth": auth
                        }]))
                    },
                ),
            )
    }

    #[tokio::test]
    async fn single_row_is_returned_as_object() {
        let base_url = spawn_stub(stub_routes()).await;
        let client = client_for(&base_url);

        let row = client
            .select_single("user_settings", &Filter::eq("user_id", "with-row"))
            .await
            .unwrap();
        assert_eq!(row, json!({"user_id": "with-row", "company_name": "Acme"}));
    }

    #[tokio::test]
    async fn zero_rows_surface_as_not_found() {
        let base_url = spawn_stub(stub_routes()).await;
        let client = client_for(&base_url);

        let error = client
            .select_single("user_settings", &Filter::eq("user_id", "nobody"))
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn duplicate_rows_are_not_not_found() {
        let base_url = spawn_stub(stub_routes()).await;
        let client = client_for(&base_url);

        let error = client
            .select_single("user_settings", &Filter::eq("user_id", "duplicated"))
            .await
            .unwrap_err();
        assert!(!error.is_not_found());
        assert!(matches!(error, StorageError::Query(ref q) if q.is_multiple_rows()));
    }

    #[tokio::test]
    async fn permission_error_keeps_code_and_status() {
        let base_url = spawn_stub(stub_routes()).await;
        let client = client_for(&base_url);

        let error = client
            .select_single("user_settings", &Filter::eq("user_id", "forbidden"))
            .await
            .unwrap_err();
        match error {
            StorageError::Query(q) => {
                assert_eq!(q.status, 401);
                assert_eq!(q.code.as_deref(), Some("42501"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn select_many_sends_order_and_user_token() {
        let base_url = spawn_stub(stub_routes()).await;
        let client = client_for(&base_url).scoped(Some(AccessToken::new("user-jwt")));

        let rows = client
            .select_many(
                "invoices",
                &Filter::eq("user_id", "u-1"),
                Some(&Order::desc("created_at")),
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["order"], "created_at.desc");
        assert_eq!(rows[0]["auth"], "Bearer user-jwt");
    }

    #[tokio::test]
    async fn unreachable_service_is_connection_failure() {
        let client = client_for("http://127.0.0.1:9");
        let error = client
            .select_single("user_settings", &Filter::eq("user_id", "u-1"))
            .await
            .unwrap_err();
        assert!(matches!(error, StorageError::ConnectionFailed(_)));
    }
}
