//! Search-engine facing output: sitemap, page metadata and JSON-LD.

mod metadata;
mod sitemap;
mod structured_data;

pub use metadata::{invoices_layout_metadata, landing_metadata, PageMetadata, Robots};
pub use sitemap::{render_sitemap_xml, sitemap, ChangeFrequency, SitemapEntry, SITEMAP_PAGES};
pub use structured_data::{structured_data, structured_data_script};

/// Escapes text for HTML/XML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
