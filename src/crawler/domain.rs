//! Per-domain crawl: candidate pages in, one result row out

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::{extract_emails, EmailSet};
use crate::url::{candidate_urls, display_domain, COMMON_PATHS};
use crate::HarvestError;
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

/// One report row: a domain and the addresses found for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    /// Domain as shown in the report (scheme stripped)
    pub domain: String,

    /// Sorted addresses joined with `", "`; empty when nothing was found
    pub emails: String,
}

impl DomainResult {
    /// A row with no addresses
    pub fn empty(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            emails: String::new(),
        }
    }

    /// A row rendering `emails` in sorted order
    pub fn from_emails(domain: impl Into<String>, emails: &EmailSet) -> Self {
        Self {
            domain: domain.into(),
            emails: emails
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Number of addresses in this row
    pub fn email_count(&self) -> usize {
        self.addresses().count()
    }

    /// Iterates over the individual addresses of this row
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.emails.split(", ").filter(|s| !s.is_empty())
    }
}

/// Crawls the candidate pages of single domains
///
/// Cheap to clone: clones share the fetcher (and therefore the connection
/// pool) and the path list.
#[derive(Debug, Clone)]
pub struct DomainCrawler {
    fetcher: PageFetcher,
    paths: Arc<[String]>,
}

impl DomainCrawler {
    /// Creates a crawler resolving `paths` against every domain
    pub fn new(fetcher: PageFetcher, paths: &[String]) -> Self {
        Self {
            fetcher,
            paths: paths.iter().cloned().collect(),
        }
    }

    /// Creates a crawler over the default contact-page paths
    pub fn with_common_paths(fetcher: PageFetcher) -> Self {
        Self {
            fetcher,
            paths: COMMON_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Paths resolved against each domain, in crawl order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Crawls one domain and aggregates every address found
    ///
    /// All candidate pages are requested at once and awaited together. A
    /// page that cannot be fetched contributes nothing; the other pages
    /// still count.
    ///
    /// # Returns
    ///
    /// * `Ok(DomainResult)` - The aggregated row (possibly with no emails)
    /// * `Err(HarvestError)` - The domain cannot form a valid URL
    pub async fn crawl_domain(&self, domain: &str) -> Result<DomainResult, HarvestError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Ok(DomainResult::empty(""));
        }

        let urls = candidate_urls(domain, &self.paths[..])?;

        tracing::debug!("Crawling {} candidate pages for {}", urls.len(), domain);

        let pages = join_all(urls.iter().map(|url| self.fetcher.fetch_page(url.as_str()))).await;

        let emails: EmailSet = pages
            .iter()
            .flat_map(|html| extract_emails(html))
            .collect();

        let fetched = pages.iter().filter(|html| !html.is_empty()).count();
        tracing::info!(
            "{}: {} of {} pages fetched, {} emails found",
            domain,
            fetched,
            pages.len(),
            emails.len()
        );

        Ok(DomainResult::from_emails(display_domain(domain), &emails))
    }
}
