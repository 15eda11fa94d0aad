//! Error types for rate limiting.

use std::time::Duration;

/// Errors that can occur during rate limiting.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// The bucket of this client IP is empty.
    #[error("Rate limit exceeded for {ip}")]
    IpLimitExceeded {
        /// The key the request was accounted to.
        ip: String,
        /// Time to wait before retrying.
        retry_after: Duration,
    },

    /// The configured quota cannot be turned into a token bucket.
    #[error("Invalid rate limit quota: {0}")]
    InvalidQuota(String),
}

impl RateLimitError {
    /// Get the retry-after duration if available.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::IpLimitExceeded { retry_after, .. } => Some(*retry_after),
            Self::InvalidQuota(_) => None,
        }
    }
}
