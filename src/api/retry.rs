// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use async_trait::async_trait;

use super::transport::{ApiResponse, TransportError};

/// Exponential backoff for retryable reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): base × 2^(retry−1).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exp)
    }

    /// `retries_done` counts retries already issued, not attempts.
    pub fn should_retry(&self, retries_done: u32, outcome: &Result<ApiResponse, TransportError>) -> bool {
        if retries_done >= self.max_retries {
            return false;
        }
        match outcome {
            Err(_) => true,
            Ok(response) => (500..600).contains(&response.status),
        }
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_from_one_second() {
        let p = RetryPolicy::default();
        assert_eq!(p.delay_for(1), Duration::from_secs(1));
        assert_eq!(p.delay_for(2), Duration::from_secs(2));
        assert_eq!(p.delay_for(3), Duration::from_secs(4));
    }

    #[test]
    fn only_transport_and_5xx_are_retried() {
        let p = RetryPolicy::default();
        assert!(p.should_retry(0, &Err(TransportError::new("connection refused"))));
        assert!(p.should_retry(2, &Ok(ApiResponse::new(503, ""))));
        assert!(!p.should_retry(3, &Ok(ApiResponse::new(503, ""))));
        assert!(!p.should_retry(0, &Ok(ApiResponse::new(404, ""))));
        assert!(!p.should_retry(0, &Ok(ApiResponse::new(429, ""))));
    }
}
