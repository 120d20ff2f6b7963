//! Client-side request throttling.
//!
//! [`RateLimiter`] is a token bucket built on `governor`'s GCRA limiter. One
//! limiter is owned by an [`RglClient`](crate::RglClient) and shared by all of
//! its clones, so every call issued through the client draws from the same
//! bucket.

use std::future::Future;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::Quota;
use tokio::time::Instant;
use tracing::debug;

use crate::error::{Result, RglError};

type DirectRateLimiter = governor::RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Token bucket parameters: `requests` tokens refill every `interval`, and at
/// most `burst` tokens can be held at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub requests: u32,
    pub interval: Duration,
    pub burst: u32,
}

impl RateLimit {
    /// The limits currently published for api.rgl.gg: 2 requests per second.
    pub const DEFAULT: RateLimit = RateLimit {
        requests: 2,
        interval: Duration::from_secs(1),
        burst: 2,
    };

    pub fn per_second(requests: u32) -> Self {
        Self {
            requests,
            interval: Duration::from_secs(1),
            burst: requests,
        }
    }

    pub fn with_burst(self, burst: u32) -> Self {
        Self { burst, ..self }
    }

    fn quota(&self) -> Result<Quota> {
        let requests = NonZeroU32::new(self.requests)
            .ok_or(RglError::InvalidRateLimit("request count must be non-zero"))?;
        let burst =
            NonZeroU32::new(self.burst).ok_or(RglError::InvalidRateLimit("burst must be non-zero"))?;
        let period = self.interval / requests.get();
        let quota = Quota::with_period(period)
            .ok_or(RglError::InvalidRateLimit("interval must be non-zero"))?;
        Ok(quota.allow_burst(burst))
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A cloneable handle to a shared token bucket.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> rgl_api::Result<()> {
/// use std::time::Duration;
/// use rgl_api::{RateLimit, RateLimiter};
///
/// let limiter = RateLimiter::new(RateLimit::per_second(5))?;
/// limiter.acquire().await;
///
/// // Give up if no token is issued within 200ms.
/// limiter
///     .acquire_or_cancel(tokio::time::sleep(Duration::from_millis(200)))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<DirectRateLimiter>,
    limit: RateLimit,
}

impl RateLimiter {
    pub fn new(limit: RateLimit) -> Result<Self> {
        let quota = limit.quota()?;
        Ok(Self {
            inner: Arc::new(DirectRateLimiter::direct(quota)),
            limit,
        })
    }

    /// The parameters this limiter was built with.
    pub fn limit(&self) -> RateLimit {
        self.limit
    }

    /// Wait until a token is available and take it.
    pub async fn acquire(&self) {
        self.inner.until_ready().await;
    }

    /// Take a token if one is available right now.
    pub fn try_acquire(&self) -> bool {
        self.inner.check().is_ok()
    }

    /// Wait for a token, giving up as soon as `cancel` completes.
    ///
    /// A token that is already available is taken even if `cancel` has
    /// completed too.
    pub async fn acquire_or_cancel<F>(&self, cancel: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = self.inner.until_ready() => Ok(()),
            _ = cancel => {
                debug!("rate limiter wait cancelled");
                Err(RglError::LimiterCancelled)
            }
        }
    }

    /// Wait for a token until `deadline`.
    pub async fn acquire_until(&self, deadline: Instant) -> Result<()> {
        self.acquire_or_cancel(tokio::time::sleep_until(deadline))
            .await
    }
}

/// A limiter for [`RateLimit::DEFAULT`]: 2 requests per second, burst of 2.
impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimit::DEFAULT).expect("RateLimit::DEFAULT has non-zero limits")
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
