//! Pretty output formatting.

use invoicr_core::auth::AuthSession;
use invoicr_core::invoices::Invoice;
use invoicr_core::settings::UserSettings;

/// Format a session for display. The refresh token is never printed.
pub fn format_session(session: &AuthSession) -> String {
    let mut output = format!("Signed in\n  User: {}", session.user.id);
    if let Some(email) = &session.user.email {
        output.push_str(&format!("\n  Email: {email}"));
    }
    output.push_str(&format!(
        "\n  Access token: {}\n  Expires in: {}s",
        session.access_token, session.expires_in
    ));
    output
}

/// Format a settings row for display.
pub fn format_settings(settings: Option<&UserSettings>) -> String {
    let Some(settings) = settings else {
        return "No settings found.".to_string();
    };

    let mut output = format!("SETTINGS ({})\n", settings.user_id);
    output.push_str(&"-".repeat(40));
    let mut keys: Vec<&String> = settings.fields.keys().collect();
    keys.sort();
    for key in keys {
        output.push_str(&format!("\n  {key}: {}", settings.fields[key]));
    }
    output
}

/// Format invoices for display.
pub fn format_invoices(invoices: &[Invoice]) -> String {
    if invoices.is_empty() {
        return "No invoices found.".to_string();
    }
    let mut output = format!("INVOICES ({})\n", invoices.len());
    output.push_str(&"-".repeat(40));
    for invoice in invoices {
        let number = invoice
            .display("invoice_number")
            .unwrap_or_else(|| "(draft)".to_string());
        let client = invoice.display("client_name").unwrap_or_default();
        let total = invoice.display("total").unwrap_or_default();
        let status = invoice.display("status").unwrap_or_default();
        output.push_str(&format!("\n{number}  {client}  {total}  {status}"));
    }
    output
}
