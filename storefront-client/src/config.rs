//! Client configuration

use crate::{ClientError, ClientResult, HttpProductSource};

/// Default storefront backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the product backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STOREFRONT_BASE_URL | http://localhost:3000 | Backend base URL |
/// | STOREFRONT_TIMEOUT_SECS | 30 | Per-request timeout |
/// | STOREFRONT_TOKEN | (none) | Bearer token |
/// | STOREFRONT_LOG_DIR | (none) | Directory for rolling log files |
/// | STOREFRONT_LOG_LEVEL | (none) | Log filter, overrides the build default |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Log directory; file logging is off when unset
    pub log_dir: Option<String>,

    /// Log filter directive (e.g. "debug", "info,storefront_client=trace")
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token: None,
            log_dir: None,
            log_level: None,
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config =
            Self::new(non_empty("STOREFRONT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));

        if let Some(raw) = non_empty("STOREFRONT_TIMEOUT_SECS") {
            config.timeout = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("STOREFRONT_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }
        config.token = non_empty("STOREFRONT_TOKEN");
        config.log_dir = non_empty("STOREFRONT_LOG_DIR");
        config.log_level = non_empty("STOREFRONT_LOG_LEVEL");

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the log directory
    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Set the log filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Create an HTTP product source from this configuration
    pub fn build_product_source(&self) -> ClientResult<HttpProductSource> {
        HttpProductSource::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
