//! Server-rendered pages.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use invoicr_core::invoices::Invoice;
use invoicr_core::seo::{
    escape_html, invoices_layout_metadata, landing_metadata, structured_data_script,
};
use invoicr_core::settings::UserSettings;

use crate::{context::RequestContext, handlers::AppError, state::AppState};

/// Path of the invoices dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard/invoices";

/// Columns shown in the invoices table, with their headings.
const INVOICE_COLUMNS: [(&str, &str); 6] = [
    ("invoice_number", "Invoice"),
    ("client_name", "Client"),
    ("issue_date", "Issued"),
    ("due_date", "Due"),
    ("status", "Status"),
    ("total", "Total"),
];

/// Handler for GET /
///
/// Public landing page carrying the JSON-LD application description.
pub async fn landing() -> Html<String> {
    let head = landing_metadata().head_tags();
    let structured_data = structured_data_script();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {head}
    {structured_data}
</head>
<body>
    <main class="landing">
        <h1>Invoicing without the busywork</h1>
        <p>Create professional invoices, manage clients and track payments in one place.</p>
        <nav>
            <a href="/features">Features</a>
            <a href="/pricing">Pricing</a>
            <a href="/login">Sign in</a>
            <a href="/signup">Get started</a>
        </nav>
    </main>
</body>
</html>"#
    ))
}

/// Handler for GET /dashboard/invoices
///
/// - Unauthenticated: redirects to /login, returning here afterwards
/// - Authenticated: invoices and settings are fetched concurrently
/// - User lookup failures render an error instead of the login redirect
pub async fn dashboard_invoices(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, AppError> {
    let Some(user) = ctx.current_user().await? else {
        let target = format!("/login?return_to={}", urlencoding::encode(DASHBOARD_PATH));
        return Ok(Redirect::to(&target).into_response());
    };

    let settings = state.settings(ctx.client.clone());
    let invoices = state.invoices(ctx.client.clone());

    let (settings, invoices) =
        tokio::join!(settings.get_user_settings(), invoices.list_invoices());
    let settings = settings?;
    let invoices = invoices?;

    tracing::debug!(
        request_id = %ctx.request_id,
        user_id = %user.id,
        invoices = invoices.len(),
        has_settings = settings.is_some(),
        "Rendering invoices dashboard"
    );

    Ok(Html(render_dashboard(settings.as_ref(), &invoices)).into_response())
}

fn render_dashboard(settings: Option<&UserSettings>, invoices: &[Invoice]) -> String {
    let head = invoices_layout_metadata().head_tags();
    let company = settings
        .and_then(UserSettings::company_name)
        .unwrap_or("Your business");

    let headings: String = INVOICE_COLUMNS
        .iter()
        .map(|(_, heading)| format!("<th>{heading}</th>"))
        .collect();

    let rows: String = if invoices.is_empty() {
        format!(
            r#"<tr><td colspan="{}" class="empty">No invoices yet</td></tr>"#,
            INVOICE_COLUMNS.len()
        )
    } else {
        invoices.iter().map(render_invoice_row).collect()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {head}
</head>
<body>
    <main class="dashboard">
        <header>
            <h1>Invoices</h1>
            <p class="company">{company}</p>
            <form method="post" action="/auth/logout"><button type="submit">Sign out</button></form>
        </header>
        <table class="invoices">
            <thead><tr>{headings}</tr></thead>
            <tbody>{rows}</tbody>
        </table>
    </main>
</body>
</html>"#,
        company = escape_html(company),
    )
}

fn render_invoice_row(invoice: &Invoice) -> String {
    let cells: String = INVOICE_COLUMNS
        .iter()
        .map(|(column, _)| {
            let value = invoice.display(column).unwrap_or_else(|| "-".to_string());
            format!("<td>{}</td>", escape_html(&value))
        })
        .collect();
    format!("<tr>{cells}</tr>")
}
