use crate::config::types::{Config, CrawlConfig, HttpConfig, ServerConfig};
use crate::{ConfigError, ConfigResult};
use axum::http::HeaderValue;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_http_config(&config.http)?;
    validate_crawl_config(&config.crawl)?;
    validate_server_config(&config.server)?;
    Ok(())
}

/// Validates outbound HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.timeout_secs < 1 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_connections < 1 || config.max_connections > 100 {
        return Err(ConfigError::Validation(format!(
            "max-connections must be between 1 and 100, got {}",
            config.max_connections
        )));
    }

    if config.max_idle_connections > config.max_connections {
        return Err(ConfigError::Validation(format!(
            "max-idle-connections ({}) cannot exceed max-connections ({})",
            config.max_idle_connections, config.max_connections
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl path configuration
fn validate_crawl_config(config: &CrawlConfig) -> ConfigResult<()> {
    if config.paths.is_empty() {
        return Err(ConfigError::Validation(
            "crawl paths cannot be empty".to_string(),
        ));
    }

    for path in &config.paths {
        validate_path(path)?;
    }

    Ok(())
}

/// A crawl path is either empty (the base URL itself) or absolute
fn validate_path(path: &str) -> ConfigResult<()> {
    if !path.is_empty() && !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "crawl path '{}' must be empty or start with '/'",
            path
        )));
    }

    if path.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "crawl path '{}' cannot contain whitespace",
            path
        )));
    }

    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> ConfigResult<()> {
    if config.host.trim().is_empty() {
        return Err(ConfigError::Validation("host cannot be empty".to_string()));
    }

    for origin in &config.allowed_origins {
        if origin == "*" {
            continue;
        }
        HeaderValue::from_str(origin)
            .map_err(|e| ConfigError::InvalidOrigin(format!("'{}': {}", origin, e)))?;
    }

    Ok(())
}
