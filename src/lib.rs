//! Mail-Harvest: contact address extraction for lists of web domains
//!
//! For every input domain this crate fetches a small fixed set of likely
//! contact pages, extracts the email addresses embedded in them, and
//! aggregates one result row per domain, ready to be exported as a
//! spreadsheet.

pub mod config;
pub mod crawler;
pub mod output;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Mail-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Domain task failed: {0}")]
    Task(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Mail-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{extract_emails, harvest, parse_domain_list, DomainResult, EmailSet};
pub use url::{candidate_urls, display_domain, normalize_base_url, COMMON_PATHS};
