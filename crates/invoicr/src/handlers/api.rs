//! JSON endpoints for the signed-in user's data.

use axum::{extract::State, Json};
use invoicr_auth::RequestClient;
use invoicr_core::invoices::Invoice;
use invoicr_core::settings::UserSettings;

use crate::{handlers::AppError, state::AppState};

/// Handler for GET /api/settings
///
/// Answers `null` for anonymous callers and users without a settings row.
pub async fn get_settings(
    State(state): State<AppState>,
    RequestClient(factory): RequestClient,
) -> Result<Json<Option<UserSettings>>, AppError> {
    let settings = state.settings(factory).get_user_settings().await?;
    Ok(Json(settings))
}

/// Handler for GET /api/invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    RequestClient(factory): RequestClient,
) -> Result<Json<Vec<Invoice>>, AppError> {
    let invoices = state.invoices(factory).list_invoices().await?;
    Ok(Json(invoices))
}
