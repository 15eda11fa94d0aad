//! Rate limiting configuration structures.

use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

/// Per-IP token bucket settings guarding the MCP message endpoint.
///
/// The bucket refills one token every `interval / limit` and holds at most
/// `burst` tokens. The defaults allow 30 requests per minute with bursts of 10.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Whether rate limiting is enabled.
    pub enabled: bool,
    /// Number of requests replenished per `interval`.
    pub limit: u32,
    /// Window over which `limit` tokens are replenished.
    #[serde(deserialize_with = "deserialize_duration")]
    pub interval: Duration,
    /// Maximum number of requests accepted back to back.
    pub burst: u32,
    /// How long an IP may stay silent before its bucket is dropped.
    #[serde(deserialize_with = "deserialize_duration")]
    pub idle_timeout: Duration,
    /// How often idle buckets are swept.
    #[serde(deserialize_with = "deserialize_duration")]
    pub sweep_interval: Duration,
    /// Value of the `Retry-After` hint sent with rejections.
    #[serde(deserialize_with = "deserialize_duration")]
    pub retry_after: Duration,
}

impl RateLimitConfig {
    /// Time it takes to replenish a single token.
    pub fn replenish_period(&self) -> Duration {
        self.interval / self.limit.max(1)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: 30,
            interval: Duration::from_secs(60),
            burst: 10,
            idle_timeout: Duration::from_secs(10 * 60),
            sweep_interval: Duration::from_secs(5 * 60),
            retry_after: Duration::from_secs(60),
        }
    }
}
