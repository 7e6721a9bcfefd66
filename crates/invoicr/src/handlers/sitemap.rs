use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use invoicr_core::seo::{render_sitemap_xml, sitemap};

use crate::state::AppState;

/// Handler for GET /sitemap.xml
///
/// Entries are stamped with the time of the request.
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap(&state.auth.config.base_url, Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap_xml(&entries),
    )
}
