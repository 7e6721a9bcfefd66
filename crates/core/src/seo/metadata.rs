use serde::{Deserialize, Serialize};

use super::escape_html;

/// Crawler directives for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const PUBLIC: Self = Self {
        index: true,
        follow: true,
    };

    pub const PRIVATE: Self = Self {
        index: false,
        follow: false,
    };
}

impl std::fmt::Display for Robots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        write!(f, "{index}, {follow}")
    }
}

/// Document-level metadata for a page or layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub robots: Robots,
}

impl PageMetadata {
    /// `<title>` and `<meta>` tags for the document head.
    pub fn head_tags(&self) -> String {
        format!(
            "<title>{}</title>\n    <meta name=\"description\" content=\"{}\">\n    <meta name=\"robots\" content=\"{}\">",
            escape_html(&self.title),
            escape_html(&self.description),
            self.robots,
        )
    }
}

/// Marketing landing page.
pub fn landing_metadata() -> PageMetadata {
    PageMetadata {
        title: "Invoicr - Simple invoicing for freelancers and small businesses".to_string(),
        description: "Create professional invoices, manage clients and track payments in one place."
            .to_string(),
        robots: Robots::PUBLIC,
    }
}

/// Dashboard invoices layout. Private pages stay out of search indexes.
pub fn invoices_layout_metadata() -> PageMetadata {
    PageMetadata {
        title: "Invoices | Invoicr".to_string(),
        description: "Manage and track your invoices".to_string(),
        robots: Robots::PRIVATE,
    }
}
