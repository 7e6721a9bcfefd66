/// Validates return_to URL to prevent open redirects.
///
/// Returns `Some(url)` if the URL is a valid relative path, `None` otherwise.
///
/// # Security
///
/// This function prevents open redirect attacks by ensuring URLs:
/// - Start with a single `/` (relative path)
/// - Do not start with `//` (protocol-relative URLs like `//evil.com`)
/// - Do not contain control characters (potential injection)
/// - Do not contain `://` (absolute URLs with schemes like `https://`, `javascript:`)
///
/// # Examples
///
/// ```
/// use invoicr_core::auth::validate_return_to;
///
/// assert_eq!(validate_return_to("/dashboard/invoices"), Some("/dashboard/invoices"));
/// assert_eq!(validate_return_to("//evil.com"), None);
/// assert_eq!(validate_return_to("https://evil.com"), None);
/// ```
pub fn validate_return_to(url: &str) -> Option<&str> {
    if !url.starts_with('/') || url.starts_with("//") {
        return None;
    }

    if url.chars().any(|c| c.is_control()) {
        return None;
    }

    if url.contains("://") {
        return None;
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dashboard_path() {
        assert_eq!(
            validate_return_to("/dashboard/invoices"),
            Some("/dashboard/invoices")
        );
    }

    #[test]
    fn accepts_path_with_query_and_fragment() {
        let path = "/dashboard/invoices?status=paid#latest";
        assert_eq!(validate_return_to(path), Some(path));
    }

    #[test]
    fn rejects_absolute_urls() {
        assert_eq!(validate_return_to("https://evil.com"), None);
        assert_eq!(validate_return_to("javascript:alert(1)"), None);
    }

    #[test]
    fn rejects_protocol_relative_url() {
        assert_eq!(validate_return_to("//evil.com/path"), None);
    }

    #[test]
    fn rejects_relative_without_leading_slash() {
        assert_eq!(validate_return_to("dashboard"), None);
        assert_eq!(validate_return_to(""), None);
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(validate_return_to("/path\r\nSet-Cookie: x=y"), None);
    }

    #[test]
    fn rejects_scheme_embedded_in_query() {
        assert_eq!(validate_return_to("/redirect?url=https://evil.com"), None);
    }
}
