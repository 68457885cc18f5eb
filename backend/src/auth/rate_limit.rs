//! Rate limiting for login attempts.
//!
//! Fixed window per client key. The window opens on the first attempt and
//! every attempt inside it counts, successful or not. Clients whose address
//! cannot be determined share the [`UNKNOWN_CLIENT`] bucket.

use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Bucket key for clients without a known peer address
pub const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Bucket {
    count: u32,
    window_start: Instant,
}

/// Outcome of a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed { .. })
    }
}

/// Rate limiter for login attempts
#[derive(Debug, Clone)]
pub struct LoginRateLimiter {
    buckets: Arc<DashMap<String, Bucket>>,
    max_attempts: u32,
    window: Duration,
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            buckets: Arc::new(DashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Record an attempt for `client_key` and report whether it may proceed.
    pub fn check(&self, client_key: &str) -> bool {
        self.attempt(client_key).is_allowed()
    }

    /// Record an attempt, returning the remaining budget or the wait time.
    ///
    /// The entry lock is held across the read and the increment, so
    /// concurrent attempts for one key cannot lose updates.
    pub fn attempt(&self, client_key: &str) -> RateLimitDecision {
        let now = Instant::now();

        let mut bucket = self
            .buckets
            .entry(client_key.to_string())
            .or_insert(Bucket {
                count: 0,
                window_start: now,
            });

        if now.duration_since(bucket.window_start) >= self.window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        if bucket.count >= self.max_attempts {
            let retry_after = self
                .window
                .checked_sub(now.duration_since(bucket.window_start))
                .unwrap_or(Duration::ZERO);
            return RateLimitDecision::Limited { retry_after };
        }

        bucket.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.max_attempts - bucket.count,
        }
    }

    /// Drop buckets whose window has elapsed
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.buckets
            .retain(|_, bucket| now.duration_since(bucket.window_start) < self.window);
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

/// Bucket key for a connection: the peer IP, or [`UNKNOWN_CLIENT`]
pub fn client_key(peer: Option<SocketAddr>) -> String {
    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
