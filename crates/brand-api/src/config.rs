//! Configuration for the collaborator API client
//!
//! - `BRANDCHECK_API_URL`: base URL (default `https://api.brandcheck.dev`)
//! - `BRANDCHECK_API_KEY`: optional, sent as a bearer token
//! - `BRANDCHECK_TIMEOUT_SECS`: optional transport timeout; unset means none

use brand_core::{Error, Result};
use brand_utils::config::{EnvLookup, env_lookup, non_blank, parse_var};
use std::fmt;
use std::time::Duration;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.brandcheck.dev";

/// Overrides [`DEFAULT_BASE_URL`]
pub const ENV_API_URL: &str = "BRANDCHECK_API_URL";
/// Bearer token sent with every request
pub const ENV_API_KEY: &str = "BRANDCHECK_API_KEY";
/// Per-request timeout in whole seconds
pub const ENV_TIMEOUT_SECS: &str = "BRANDCHECK_TIMEOUT_SECS";

/// Settings for [`crate::HttpBrandApi`]
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,

    /// Bearer token for the API, if it requires one
    pub api_key: Option<String>,

    /// Whole-request timeout enforced by the HTTP client
    pub timeout: Option<Duration>,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: format!("brandcheck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    /// Load configuration from any key/value source
    ///
    /// # Example
    ///
    /// ```
    /// use brand_api::ApiConfig;
    ///
    /// let lookup = |key: &str| (key == "BRANDCHECK_API_URL").then(|| "http://localhost:8787/".to_string());
    /// let config = ApiConfig::from_lookup(&lookup)?;
    /// assert_eq!(config.base_url, "http://localhost:8787");
    /// # Ok::<(), brand_core::Error>(())
    /// ```
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = non_blank(lookup(ENV_API_URL)) {
            config = config.with_base_url(url);
        }

        config.api_key = non_blank(lookup(ENV_API_KEY));

        if let Some(secs) = parse_var::<u64>(lookup, ENV_TIMEOUT_SECS).map_err(Error::Config)? {
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the bearer token
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the transport timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::Config(format!(
                "Base URL '{}' has no host",
                self.base_url
            )));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::Config(
                "timeout must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}
