//! Batch coordinator - runs the domain crawler over a whole input list
//!
//! This module contains the batch loop that:
//! - Builds one shared HTTP client per batch
//! - Schedules every domain according to the configured strategy
//! - Keeps each result in its input slot regardless of completion order
//! - Substitutes an empty row for any domain whose crawl failed
//! - Drops the client (and its connection pool) when the batch ends

use crate::config::{Config, CrawlStrategy};
use crate::crawler::domain::{DomainCrawler, DomainResult};
use crate::crawler::fetcher::PageFetcher;
use crate::url::display_domain;
use crate::HarvestError;
use futures::future::join_all;

/// Splits newline-separated user input into domain entries
///
/// Lines are trimmed and blank lines dropped. Order and duplicates are
/// preserved.
///
/// # Example
///
/// ```
/// use mail_harvest::parse_domain_list;
///
/// let domains = parse_domain_list("a.com\n\n  \nb.com\r\na.com");
/// assert_eq!(domains, vec!["a.com", "b.com", "a.com"]);
/// ```
pub fn parse_domain_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Main batch coordinator structure
pub struct Coordinator {
    crawler: DomainCrawler,
    strategy: CrawlStrategy,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let fetcher = PageFetcher::from_config(&config.http)?;

        Ok(Self {
            crawler: DomainCrawler::new(fetcher, &config.crawl.paths),
            strategy: config.crawl.strategy,
        })
    }

    /// Creates a coordinator over an existing domain crawler
    pub fn with_crawler(crawler: DomainCrawler, strategy: CrawlStrategy) -> Self {
        Self { crawler, strategy }
    }

    /// Runs the batch and returns one row per domain, in input order
    ///
    /// Consumes the coordinator: the shared client is released once every
    /// domain has finished. A domain whose crawl fails yields a row with an
    /// empty email field; it never aborts the batch.
    pub async fn run(self, domains: &[String]) -> Vec<DomainResult> {
        tracing::info!(
            "Processing {} domains, {} pages each ({:?} strategy)",
            domains.len(),
            self.crawler.paths().len(),
            self.strategy
        );

        let results = match self.strategy {
            CrawlStrategy::Concurrent => self.run_concurrent(domains).await,
            CrawlStrategy::Sequential => self.run_sequential(domains).await,
        };

        let with_emails = results.iter().filter(|r| !r.emails.is_empty()).count();
        tracing::info!(
            "Batch complete: {} of {} domains yielded emails",
            with_emails,
            results.len()
        );

        results
    }

    /// Spawns one task per domain and joins the handles in input order
    async fn run_concurrent(&self, domains: &[String]) -> Vec<DomainResult> {
        let handles: Vec<_> = domains
            .iter()
            .map(|domain| {
                let crawler = self.crawler.clone();
                let domain = domain.clone();
                tokio::spawn(async move { crawler.crawl_domain(&domain).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(domains)
            .map(|(joined, domain)| {
                let outcome = joined
                    .map_err(|e| HarvestError::Task(e.to_string()))
                    .and_then(|result| result);
                isolate(domain, outcome)
            })
            .collect()
    }

    /// Crawls domains one after another
    async fn run_sequential(&self, domains: &[String]) -> Vec<DomainResult> {
        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            let outcome = self.crawler.crawl_domain(domain).await;
            results.push(isolate(domain, outcome));
        }
        results
    }
}

/// Replaces a failed domain crawl with an empty row for that domain
fn isolate(domain: &str, outcome: Result<DomainResult, HarvestError>) -> DomainResult {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Crawl failed for {}: {}", domain, e);
            DomainResult::empty(display_domain(domain))
        }
    }
}

/// Runs a full harvest over newline-separated input
///
/// Convenience entry point: parses the domain list, builds a coordinator
/// for this batch only, and runs it.
///
/// # Returns
///
/// * `Ok(Vec<DomainResult>)` - One row per non-blank input line, in order
/// * `Err(HarvestError)` - The HTTP client could not be built
pub async fn harvest(config: &Config, input: &str) -> Result<Vec<DomainResult>, HarvestError> {
    let domains = parse_domain_list(input);
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(&domains).await)
}
