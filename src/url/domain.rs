use super::normalize::strip_scheme;

/// Renders a domain input the way it appears in the report
///
/// The trimmed input with any leading `http://` or `https://` removed. Every
/// record of a batch uses this form, including records substituted for
/// domains whose crawl failed.
///
/// # Examples
///
/// ```
/// use mail_harvest::url::display_domain;
///
/// assert_eq!(display_domain(" https://example.com "), "example.com");
/// assert_eq!(display_domain("example.com/shop"), "example.com/shop");
/// ```
pub fn display_domain(domain: &str) -> String {
    let domain = domain.trim();
    strip_scheme(domain).unwrap_or(domain).to_string()
}
