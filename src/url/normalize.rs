use crate::{UrlError, UrlResult};
use url::Url;

/// Returns the input with a leading `http://` or `https://` removed, if any
///
/// The comparison is ASCII case-insensitive.
pub(crate) fn strip_scheme(input: &str) -> Option<&str> {
    for scheme in ["https://", "http://"] {
        if input.len() >= scheme.len()
            && input.is_char_boundary(scheme.len())
            && input[..scheme.len()].eq_ignore_ascii_case(scheme)
        {
            return Some(&input[scheme.len()..]);
        }
    }
    None
}

/// Normalizes a raw domain input into a fully qualified base URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `https://` unless the input already carries an HTTP(S) scheme
/// 3. Parse the URL; reject if malformed
/// 4. Reject non-HTTP(S) schemes and URLs without a host
///
/// # Arguments
///
/// * `domain` - The raw domain string (e.g. `example.com` or `http://example.com/shop`)
///
/// # Returns
///
/// * `Ok(Url)` - The base URL candidate paths are resolved against
/// * `Err(UrlError)` - The input cannot form a valid HTTP(S) URL
///
/// # Examples
///
/// ```
/// use mail_harvest::url::normalize_base_url;
///
/// let url = normalize_base_url("  example.com ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// let url = normalize_base_url("http://example.com/shop").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/shop");
/// ```
pub fn normalize_base_url(domain: &str) -> UrlResult<Url> {
    let domain = domain.trim();

    let with_scheme = if strip_scheme(domain).is_some() {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(format!("{}: {}", domain, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingDomain),
    }
}
