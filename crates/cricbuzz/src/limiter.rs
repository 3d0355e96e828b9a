// ABOUTME: Global minimum-interval throttle shared by every request the client makes.
// ABOUTME: One async mutex guards the last-request instant and is held across the wait.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Enforces a single request cadence across all callers and hosts.
///
/// The lock is held while sleeping, so concurrent callers queue up behind each
/// other and the interval holds globally rather than per caller.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until `interval` has passed since the previous request began,
    /// then records now as the start of the next one.
    ///
    /// Call it before every request, even when the request later fails.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                trace!(wait_ms = wait.as_millis() as u64, "rate limit wait");
                sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn first_acquire_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_millis(500));
        let start = std::time::Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(250));
    }

    #[tokio::test]
    async fn sequential_acquires_respect_interval() {
        let interval = Duration::from_millis(60);
        let limiter = RateLimiter::new(interval);
        let start = std::time::Instant::now();
        for _ in 0..4 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() >= interval * 3);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_cadence() {
        let interval = Duration::from_millis(60);
        let limiter = Arc::new(RateLimiter::new(interval));
        let start = std::time::Instant::now();

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move { limiter.acquire().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(start.elapsed() >= interval * 2);
    }
}
