//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. The Reporting
//! API enforces per-project quotas, so every request waits for a permit.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for rate limiting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Maximum number of requests per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 10,
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    ///
    /// Zero values are clamped to one.
    pub fn new(config: &RateLimiterConfig) -> Self {
        let rate = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate).allow_burst(burst);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}
