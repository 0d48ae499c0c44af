//! Crawler module for domain fetching and email extraction
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching that degrades every failure to empty content
//! - HTML parsing and email extraction
//! - Per-domain fan-out over the candidate pages
//! - Batch coordination across domains

mod coordinator;
mod domain;
mod fetcher;
mod parser;

pub use coordinator::{harvest, parse_domain_list, Coordinator};
pub use domain::{DomainCrawler, DomainResult};
pub use fetcher::{build_http_client, FetchResult, PageFetcher};
pub use parser::{extract_emails, parse_html, EmailSet, ParsedPage};
