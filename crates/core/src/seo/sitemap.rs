use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::escape_html;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Public pages listed in the sitemap, with their crawl hints.
pub const SITEMAP_PAGES: [(&str, ChangeFrequency, f32); 7] = [
    ("/", ChangeFrequency::Weekly, 1.0),
    ("/features", ChangeFrequency::Monthly, 0.8),
    ("/pricing", ChangeFrequency::Monthly, 0.8),
    ("/about", ChangeFrequency::Monthly, 0.6),
    ("/contact", ChangeFrequency::Yearly, 0.5),
    ("/login", ChangeFrequency::Yearly, 0.4),
    ("/signup", ChangeFrequency::Monthly, 0.7),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Builds the sitemap for `base_url`, stamping every entry with `now`.
pub fn sitemap(base_url: &Url, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    SITEMAP_PAGES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: page_url(base_url, path),
            last_modified: now,
            change_frequency: *change_frequency,
            priority: *priority,
        })
        .collect()
}

fn page_url(base_url: &Url, path: &str) -> String {
    base_url
        .join(path)
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", base_url.as_str().trim_end_matches('/'), path))
}

/// Renders entries as a sitemaps.org `urlset` document.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_html(&entry.url),
            entry.last_modified.to_rfc3339(),
            entry.change_frequency.as_str(),
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://invoicr.app").unwrap()
    }

    #[test]
    fn lists_exactly_the_seven_public_pages() {
        let entries = sitemap(&base(), Utc::now());
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![
                "https://invoicr.app/",
                "https://invoicr.app/features",
                "https://invoicr.app/pricing",
                "https://invoicr.app/about",
                "https://invoicr.app/contact",
                "https://invoicr.app/login",
                "https://invoicr.app/signup",
            ]
        );
    }

    #[test]
    fn priorities_match_page_table() {
        let entries = sitemap(&base(), Utc::now());
        let priorities: Vec<f32> = entries.iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![1.0, 0.8, 0.8, 0.6, 0.5, 0.4, 0.7]);
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn timestamps_are_generation_time() {
        let before = Utc::now();
        let entries = sitemap(&base(), Utc::now());
        assert!(entries.iter().all(|e| e.last_modified >= before));
    }

    #[test]
    fn xml_timestamps_parse_and_are_not_before_invocation() {
        let before = Utc::now();
        let xml = render_sitemap_xml(&sitemap(&base(), Utc::now()));

        let stamps: Vec<&str> = xml
            .split("<lastmod>")
            .skip(1)
            .filter_map(|chunk| chunk.split("</lastmod>").next())
            .collect();
        assert_eq!(stamps.len(), 7);

        for stamp in stamps {
            let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
            assert!(parsed.with_timezone(&Utc) >= before);
        }
    }

    #[test]
    fn xml_contains_priorities_and_frequencies() {
        let xml = render_sitemap_xml(&sitemap(&base(), Utc::now()));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://invoicr.app/pricing</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>"));
        assert_eq!(xml.matches("<url>").count(), 7);
    }

    #[test]
    fn base_with_path_prefix_is_replaced_by_absolute_paths() {
        let base = Url::parse("https://example.com/app/").unwrap();
        let entries = sitemap(&base, Utc::now());
        assert_eq!(entries[1].url, "https://example.com/features");
    }
}
