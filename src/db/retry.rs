use std::{fmt::Display, future::Future, time::Duration};

use async_trait::async_trait;
use tracing::warn;

use crate::config::{DatabaseConfig, defaults};

/// Fixed-delay retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        Self::fixed(cfg.connect_attempts, cfg.retry_delay())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(
            defaults::DEFAULT_DB_CONNECT_ATTEMPTS,
            Duration::from_millis(defaults::DEFAULT_DB_RETRY_DELAY_MS),
        )
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Runs `op` until it succeeds or `policy.max_attempts` is spent, sleeping
/// `policy.delay` between attempts. `op` receives the 1-based attempt index.
///
/// A policy with `max_attempts == 0` still runs once.
pub async fn retry<T, E, F, Fut>(
    policy: RetryPolicy,
    sleeper: &dyn Sleeper,
    mut op: F,
) -> Result<T, RetryExhausted<E>>
where
    E: Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(attempt, max_attempts, error = %err, "attempt failed");
                if attempt >= max_attempts {
                    return Err(RetryExhausted {
                        attempts: attempt,
                        last_error: err,
                    });
                }
            }
        }
        sleeper.sleep(policy.delay).await;
        attempt += 1;
    }
}
