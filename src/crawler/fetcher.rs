//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with a fixed user agent
//! - Bounding the number of requests in flight for one batch
//! - GET requests to fetch page content
//! - Error classification for logging
//!
//! Fetch failures never reach the caller of [`PageFetcher::fetch_page`]:
//! every failure degrades to empty page content.

use crate::config::HttpConfig;
use reqwest::{redirect::Policy, Client};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, TLS failure, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Page content, or an empty string for any failure
    pub fn into_body(self) -> String {
        match self {
            FetchResult::Success { body, .. } => body,
            _ => String::new(),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The outbound HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use mail_harvest::config::HttpConfig;
/// use mail_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .pool_max_idle_per_host(config.max_idle_connections)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues page requests over one shared client
///
/// Cloning is cheap and every clone shares the same connection pool and
/// the same in-flight request ceiling. Requests beyond the ceiling wait for
/// a free slot instead of failing.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    permits: Arc<Semaphore>,
}

impl PageFetcher {
    /// Creates a fetcher over an existing client
    ///
    /// `max_connections` bounds how many requests are in flight at once
    /// across all clones of this fetcher.
    pub fn new(client: Client, max_connections: usize) -> Self {
        Self {
            client,
            permits: Arc::new(Semaphore::new(max_connections.max(1))),
        }
    }

    /// Builds the client described by `config` and wraps it in a fetcher
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::new(client, config.max_connections))
    }

    /// Fetches a URL and classifies the outcome
    ///
    /// Redirects are followed by the client. Any 2xx status counts as
    /// success. No retries are attempted.
    pub async fn fetch_url(&self, url: &str) -> FetchResult {
        // The semaphore is never closed, so acquire only fails if that changes.
        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                return FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return classify_error(&e),
        };

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return FetchResult::HttpError {
                status_code: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => FetchResult::Success {
                final_url,
                status_code: status.as_u16(),
                body,
            },
            Err(e) => classify_error(&e),
        }
    }

    /// Fetches a page, returning its HTML or an empty string on any failure
    pub async fn fetch_page(&self, url: &str) -> String {
        let result = self.fetch_url(url).await;

        match &result {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!(
                    "Fetched {} ({} -> {}, {} bytes)",
                    url,
                    status_code,
                    final_url,
                    body.len()
                );
            }
            FetchResult::HttpError { status_code } => {
                tracing::debug!("Skipping {}: HTTP {}", url, status_code);
            }
            FetchResult::NetworkError { error } => {
                tracing::debug!("Skipping {}: {}", url, error);
            }
        }

        result.into_body()
    }
}

fn classify_error(e: &reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}
