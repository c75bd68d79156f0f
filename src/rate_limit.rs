//! Rate limiting for NCBI E-utilities compliance
//!
//! NCBI allows 3 requests per second without an API key and 10 requests per
//! second with one; violations can result in IP blocking. The transport
//! acquires a token before every outbound request.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<TokenBucket>>,
}

struct TokenBucket {
    tokens: f64,
    capacity: f64,
    refill_rate: f64, // tokens per second
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified rate
    ///
    /// # Arguments
    ///
    /// * `rate` - Maximum requests per second (e.g. 3.0 for the NCBI default)
    ///
    /// # Examples
    ///
    /// ```
    /// use litscreen::RateLimiter;
    ///
    /// let limiter_default = RateLimiter::ncbi_default();
    /// let limiter_with_key = RateLimiter::new(10.0);
    /// ```
    pub fn new(rate: f64) -> Self {
        let capacity = rate.max(1.0);
        Self {
            bucket: Arc::new(Mutex::new(TokenBucket {
                tokens: capacity,
                capacity,
                refill_rate: rate,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Rate limiter for the NCBI API without an API key (3 requests/second)
    pub fn ncbi_default() -> Self {
        Self::new(3.0)
    }

    /// Rate limiter for the NCBI API with an API key (10 requests/second)
    pub fn ncbi_with_key() -> Self {
        Self::new(10.0)
    }

    /// Acquire a token, waiting if necessary to respect the configured rate
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.bucket.lock().unwrap();
                refill(&mut bucket);

                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    debug!(remaining_tokens = %bucket.tokens, "Token acquired");
                    None
                } else {
                    // Time until one full token accumulates
                    let deficit = 1.0 - bucket.tokens;
                    Some(Duration::from_secs_f64(deficit / bucket.refill_rate))
                }
            };

            match wait {
                None => return,
                Some(duration) => {
                    debug!(wait_ms = duration.as_millis() as u64, "Waiting for rate limit");
                    tokio::time::sleep(duration).await;
                }
            }
        }
    }

    /// Check if a token is available without consuming one
    pub fn check_available(&self) -> bool {
        let mut bucket = self.bucket.lock().unwrap();
        refill(&mut bucket);
        bucket.tokens >= 1.0
    }

    /// The configured rate limit (requests per second)
    pub fn rate(&self) -> f64 {
        self.bucket.lock().unwrap().refill_rate
    }
}

fn refill(bucket: &mut TokenBucket) {
    let now = Instant::now();
    let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
    bucket.tokens = (bucket.tokens + elapsed * bucket.refill_rate).min(bucket.capacity);
    bucket.last_refill = now;
}
