use invoicr_core::auth::AuthClient;
use invoicr_core::factory::ClientFactory;
use invoicr_core::invoices::{decode_invoices, dashboard_order, Invoice, InvoiceError, INVOICES_TABLE};
use invoicr_core::storage::{DataClient, Filter};

/// Lists the current user's invoices, newest first.
#[derive(Debug, Clone)]
pub struct InvoiceService<F> {
    factory: F,
}

impl<F: ClientFactory> InvoiceService<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Invoices owned by the authenticated user; empty for anonymous callers.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
        let client = self.factory.create().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create backend client for invoices");
            InvoiceError::from(e)
        })?;

        let Some(user) = client.current_user().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to resolve current user for invoices");
            InvoiceError::from(e)
        })?
        else {
            return Ok(Vec::new());
        };

        let rows = client
            .select_many(
                INVOICES_TABLE,
                &Filter::eq("user_id", &user.id),
                Some(&dashboard_order()),
            )
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Invoice query failed");
                InvoiceError::from(e)
            })?;

        Ok(decode_invoices(rows)?)
    }
}
