use serde::Deserialize;

/// Main configuration structure for Mail-Harvest
///
/// Every section is optional; missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub crawl: CrawlConfig,
    pub server: ServerConfig,
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of requests in flight at once for one batch
    #[serde(rename = "max-connections")]
    pub max_connections: usize,

    /// Maximum number of idle kept-alive connections per host
    #[serde(rename = "max-idle-connections")]
    pub max_idle_connections: usize,

    /// Maximum number of redirect hops followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 8,
            connect_timeout_secs: 5,
            max_connections: 10,
            max_idle_connections: 5,
            max_redirects: 10,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// How domains of one batch are scheduled relative to each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrawlStrategy {
    /// All domains in flight at once, bounded by the connection ceiling
    #[default]
    Concurrent,
    /// One domain at a time, pages of that domain still fetched concurrently
    Sequential,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Relative paths resolved against each domain's base URL
    pub paths: Vec<String>,

    /// Cross-domain scheduling strategy
    pub strategy: CrawlStrategy,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            paths: crate::url::COMMON_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            strategy: CrawlStrategy::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// Origins allowed by CORS; `*` allows any origin
    #[serde(rename = "allowed-origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["*".to_string()],
        }
    }
}
