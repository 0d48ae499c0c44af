use super::normalize::normalize_base_url;
use crate::{UrlError, UrlResult};
use url::Url;

/// Pages most likely to carry contact addresses, in crawl order
pub const COMMON_PATHS: &[&str] = &["", "/contact", "/about", "/support", "/team", "/info"];

/// Builds the candidate URL set for a domain
///
/// Each path is resolved against the normalized base URL, in the order
/// given. The empty path resolves to the base URL itself; absolute paths
/// replace any path carried by the input.
///
/// # Arguments
///
/// * `domain` - The raw domain input
/// * `paths` - Relative paths to resolve (usually [`COMMON_PATHS`])
///
/// # Examples
///
/// ```
/// use mail_harvest::url::{candidate_urls, COMMON_PATHS};
///
/// let urls = candidate_urls("example.com", COMMON_PATHS).unwrap();
/// assert_eq!(urls.len(), 6);
/// assert_eq!(urls[1].as_str(), "https://example.com/contact");
/// ```
pub fn candidate_urls<S: AsRef<str>>(domain: &str, paths: &[S]) -> UrlResult<Vec<Url>> {
    let base = normalize_base_url(domain)?;

    paths
        .iter()
        .map(|path| {
            base.join(path.as_ref())
                .map_err(|e| UrlError::Parse(format!("{} + '{}': {}", base, path.as_ref(), e)))
        })
        .collect()
}
