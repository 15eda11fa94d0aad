//! Rate limit manager implementation.

use std::{
    collections::HashMap,
    num::NonZeroU32,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use config::RateLimitConfig;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::RateLimitError;

/// A client IP we have seen recently, with its own token bucket.
struct Visitor {
    limiter: Arc<DefaultDirectRateLimiter>,
    last_seen: Instant,
}

/// Token bucket per client IP.
///
/// The map of visitors sits behind a single lock which is held only while an
/// entry is looked up, created or removed. Consuming a token happens outside
/// the lock, the bucket itself is thread-safe.
pub struct RateLimitManager {
    visitors: Mutex<HashMap<String, Visitor>>,
    quota: Quota,
    idle_timeout: Duration,
    retry_after: Duration,
}

impl RateLimitManager {
    /// Create a new rate limit manager from the configured quota.
    pub fn new(config: &RateLimitConfig) -> Result<Self, RateLimitError> {
        let period = config.replenish_period();

        let burst = NonZeroU32::new(config.burst)
            .ok_or_else(|| RateLimitError::InvalidQuota(format!("Invalid burst size: {}", config.burst)))?;

        let quota = Quota::with_period(period)
            .ok_or_else(|| RateLimitError::InvalidQuota(format!("Invalid replenish period: {period:?}")))?
            .allow_burst(burst);

        log::debug!(
            "Rate limiting {} requests per {:?} per IP, one token every {period:?}, burst of {burst}",
            config.limit,
            config.interval,
        );

        Ok(Self {
            visitors: Mutex::new(HashMap::new()),
            quota,
            idle_timeout: config.idle_timeout,
            retry_after: config.retry_after,
        })
    }

    /// Try to take one token from the bucket of `ip`.
    ///
    /// The first request of an IP creates a full bucket for it.
    pub fn check(&self, ip: &str) -> Result<(), RateLimitError> {
        let limiter = self.limiter(ip);

        match limiter.check() {
            Ok(()) => Ok(()),
            Err(_) => {
                log::debug!("Request blocked for key '{ip}' - rate limit exceeded");

                Err(RateLimitError::IpLimitExceeded {
                    ip: ip.to_string(),
                    retry_after: self.retry_after,
                })
            }
        }
    }

    /// Drop every visitor that has been idle for longer than the idle timeout.
    ///
    /// Returns the number of evicted entries.
    pub fn sweep(&self) -> usize {
        let mut visitors = self.visitors();
        let before = visitors.len();

        visitors.retain(|_, visitor| visitor.last_seen.elapsed() <= self.idle_timeout);

        before - visitors.len()
    }

    /// Number of IPs currently holding a bucket.
    pub fn tracked(&self) -> usize {
        self.visitors().len()
    }

    /// Run [`Self::sweep`] every `interval` until `shutdown` is cancelled.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration, shutdown: CancellationToken) -> JoinHandle<()> {
        let manager = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        log::debug!("Rate limit sweeper stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let evicted = manager.sweep();

                        if evicted > 0 {
                            log::debug!("Evicted {evicted} idle rate limit entries");
                        }
                    }
                }
            }
        })
    }

    fn limiter(&self, ip: &str) -> Arc<DefaultDirectRateLimiter> {
        let mut visitors = self.visitors();
        let now = Instant::now();

        if let Some(visitor) = visitors.get_mut(ip) {
            visitor.last_seen = now;
            return visitor.limiter.clone();
        }

        let limiter = Arc::new(RateLimiter::direct(self.quota));

        visitors.insert(
            ip.to_string(),
            Visitor {
                limiter: limiter.clone(),
                last_seen: now,
            },
        );

        limiter
    }

    fn visitors(&self) -> MutexGuard<'_, HashMap<String, Visitor>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.visitors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
