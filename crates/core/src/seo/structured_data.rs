use serde_json::{json, Value};

/// JSON-LD description of the application for search engines.
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Invoicr",
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": "Create professional invoices, manage clients and track payments in one place.",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        },
        "featureList": [
            "Professional invoice templates",
            "Client management",
            "Payment tracking",
            "Revenue analytics"
        ]
    })
}

/// The JSON-LD document wrapped in its `<script>` tag.
///
/// `</` is escaped so the payload can never close the script element early.
pub fn structured_data_script() -> String {
    let payload = structured_data().to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{payload}</script>")
}
