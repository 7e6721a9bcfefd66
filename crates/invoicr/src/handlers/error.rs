use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use invoicr_core::auth::{auth_error_to_status_code, AuthError};
use invoicr_core::invoices::InvoiceError;
use invoicr_core::settings::SettingsError;
use invoicr_core::storage::{storage_error_to_status_code, StorageError};

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(e) = self.0.downcast_ref::<SettingsError>() {
            match e {
                SettingsError::Client(_) => 500,
                SettingsError::Auth(e) => auth_error_to_status_code(e),
                SettingsError::Query(e) => storage_error_to_status_code(e),
            }
        } else if let Some(e) = self.0.downcast_ref::<InvoiceError>() {
            match e {
                InvoiceError::Client(_) => 500,
                InvoiceError::Auth(e) => auth_error_to_status_code(e),
                InvoiceError::Query(e) => storage_error_to_status_code(e),
            }
        } else if let Some(e) = self.0.downcast_ref::<StorageError>() {
            storage_error_to_status_code(e)
        } else if let Some(e) = self.0.downcast_ref::<AuthError>() {
            auth_error_to_status_code(e)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = status_code.as_u16(), "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicr_core::factory::InitError;
    use invoicr_core::storage::QueryError;

    fn query_error(status: u16, code: &str) -> StorageError {
        StorageError::Query(QueryError {
            status,
            code: Some(code.to_string()),
            message: "boom".to_string(),
            details: None,
            hint: None,
        })
    }

    #[test]
    fn settings_query_failure_maps_through_storage_status() {
        let error = AppError::from(SettingsError::Query(query_error(500, "XX000")));
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn invoice_permission_failure_keeps_client_status() {
        let error = AppError::from(InvoiceError::Query(query_error(403, "42501")));
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn auth_outage_maps_to_service_unavailable() {
        let error = AppError::from(SettingsError::Auth(AuthError::Transport(
            "connection refused".to_string(),
        )));
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn configuration_failures_are_internal() {
        let error = AppError::from(InvoiceError::Client(InitError::MissingConfig(
            "SUPABASE_URL",
        )));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = AppError::from(anyhow::anyhow!("template failure"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
