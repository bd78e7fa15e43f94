//! HTTP transport with retry and rate limiting
//!
//! Executes [`Request`]s against the reporting service and handles:
//! - Automatic retries with configurable backoff
//! - Rate limiting to prevent API throttling
//! - Authentication through the auth module
//! - Error classification for retry decisions

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::request::Request;
use crate::transport::{Response, Transport};
use crate::types::BackoffType;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Production endpoint of the YouTube Reporting API
pub const DEFAULT_BASE_URL: &str = "https://youtubereporting.googleapis.com/";

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Root URL request paths are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("yt-reporting/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP transport with retry and rate limiting
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpTransport {
    /// Create a transport without credentials
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a transport with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = parse_base_url(&config.base_url)?;
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);
        let authenticator = Authenticator::with_client(auth_config, client.clone());

        Ok(Self {
            client,
            base_url,
            config,
            authenticator,
            rate_limiter,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the transport config
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Resolve a request to its full URL
    ///
    /// The expanded path is joined onto the base URL and the query
    /// parameters are appended in declaration order. A path that URL
    /// resolution would rewrite (dot segments) is rejected.
    pub fn build_url(&self, request: &Request) -> Result<Url> {
        let path = request.path().trim_start_matches('/');
        let mut url = self.base_url.join(path)?;

        let expected = format!("{}{path}", self.base_url.path());
        if url.path() != expected {
            return Err(Error::invalid_param(
                "path",
                format!("'{path}' resolves to '{}'", url.path()),
            ));
        }

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &pairs {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Send one request, retrying transient failures
    #[allow(clippy::too_many_lines)]
    async fn send(&self, request: &Request) -> Result<Response> {
        let url = self.build_url(request)?;
        let method = reqwest::Method::from(request.method());
        let body = request.body();
        let max_retries = self.config.max_retries;
        let timeout = self.config.timeout;

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            // Wait for rate limiter
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.request(method.clone(), url.clone());

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            if let Some(ref body) = body {
                req = req.json(body);
            }

            req = req.timeout(timeout);
            req = self.authenticator.apply(req).await?;

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    // Check for rate limiting
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = extract_retry_after(&response);
                        if attempt < max_retries {
                            warn!(
                                operation = %request.operation_id(),
                                "Rate limited (429), attempt {}/{}, waiting {}s",
                                attempt + 1,
                                max_retries + 1,
                                retry_after
                            );
                            tokio::time::sleep(Duration::from_secs(retry_after)).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::RateLimited {
                            retry_after_seconds: retry_after,
                        });
                    }

                    // Check for retryable server errors
                    if is_retryable_status(status) && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            operation = %request.operation_id(),
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::http_status(status.as_u16(), String::new()));
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }

                    let content_type = response
                        .headers()
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let bytes = response.bytes().await?;

                    debug!(
                        operation = %request.operation_id(),
                        status = status.as_u16(),
                        bytes = bytes.len(),
                        "Request succeeded: {} {}",
                        method,
                        url
                    );
                    return Ok(Response::new(status.as_u16(), content_type, bytes));
                }
                Err(e) => {
                    if e.is_timeout() {
                        #[allow(clippy::cast_possible_truncation)]
                        let timeout_ms = timeout.as_millis() as u64;
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                operation = %request.operation_id(),
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout { timeout_ms });
                            continue;
                        }
                        return Err(Error::Timeout { timeout_ms });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            operation = %request.operation_id(),
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        // Exhausted all retries
        Err(last_error.unwrap_or(Error::MaxRetriesExceeded { max_retries }))
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &Request) -> Result<Response> {
        self.send(request).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("authenticator", &self.authenticator)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Parse the base URL, making sure relative paths join beneath it
fn parse_base_url(base: &str) -> Result<Url> {
    if base.trim().is_empty() {
        return Err(Error::config("base_url must not be empty"));
    }
    if base.ends_with('/') {
        Ok(Url::parse(base)?)
    } else {
        Ok(Url::parse(&format!("{base}/"))?)
    }
}

/// Check if an HTTP status is retryable
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Extract retry-after header value
fn extract_retry_after(response: &reqwest::Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
