//! Configuration module for Mail-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: `Config::default()` reproduces the
//! built-in settings.
//!
//! # Example
//!
//! ```no_run
//! use mail_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, CrawlStrategy, HttpConfig, ServerConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
