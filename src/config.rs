//! Service configuration
//!
//! Supplies the base URL, credentials, default page size and HTTP tuning
//! for a [`ReportingService`](crate::service::ReportingService). Loaded
//! from YAML, then overridden from the environment.
//!
//! ```yaml
//! base_url: "https://youtubereporting.googleapis.com/"
//! default_page_size: 50
//! auth:
//!   type: oauth2_refresh
//!   client_id: "..."
//!   client_secret: "..."
//!   refresh_token: "..."
//! http:
//!   timeout_seconds: 30
//!   max_retries: 3
//!   retry_backoff:
//!     type: exponential
//!     initial_ms: 100
//!     max_ms: 60000
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, HttpTransport, RateLimiterConfig, DEFAULT_BASE_URL};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Overrides `base_url`
pub const ENV_BASE_URL: &str = "YT_REPORTING_BASE_URL";
/// Sets bearer auth with this access token
pub const ENV_ACCESS_TOKEN: &str = "YT_REPORTING_ACCESS_TOKEN";
/// Sets API key auth with this key
pub const ENV_API_KEY: &str = "YT_REPORTING_API_KEY";
/// Overrides `default_page_size`
pub const ENV_PAGE_SIZE: &str = "YT_REPORTING_PAGE_SIZE";

// ============================================================================
// Top-Level Service Config
// ============================================================================

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Root URL of the reporting service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size sent with list requests when the caller gives none
    #[serde(default)]
    pub default_page_size: Option<u32>,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_page_size: None,
            auth: AuthConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ServiceConfig {
    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Load the effective config
    ///
    /// Reads `path` if given (defaults otherwise), applies environment
    /// overrides and validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading service config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// An access token takes precedence over an API key.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.is_empty()) {
            self.auth = AuthConfig::bearer(token);
        } else if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
            self.auth = AuthConfig::api_key(key);
        }

        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            let size = size.trim().parse::<u32>().map_err(|e| {
                Error::config(format!("{ENV_PAGE_SIZE} must be a positive integer: {e}"))
            })?;
            self.default_page_size = Some(size);
        }

        Ok(())
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        url::Url::parse(&self.base_url)?;

        if self.default_page_size == Some(0) {
            return Err(Error::config("default_page_size must be positive"));
        }
        if self.http.timeout_seconds == 0 {
            return Err(Error::config("http.timeout_seconds must be positive"));
        }
        Ok(())
    }

    /// HTTP transport settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let backoff = &self.http.retry_backoff;
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                backoff.backoff_type,
                Duration::from_millis(backoff.initial_ms),
                Duration::from_millis(backoff.max_ms),
            );

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }

    /// Build the production transport for this config
    pub fn http_transport(&self) -> Result<HttpTransport> {
        HttpTransport::with_auth(self.http_client_config(), self.auth.clone())
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Rate limiting; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: default_rate_limit(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}
