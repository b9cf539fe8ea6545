use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff policy for startup connection attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt. Zero means a single try.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Scale each delay into 50..=100% of its nominal value.
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal delay before retry number `retry` (1-based), before jitter.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let nominal_ms = self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(exponent);
        let max_ms = self.max_delay.as_millis() as f64;
        Duration::from_millis(nominal_ms.min(max_ms).round() as u64)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Runs `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned unchanged.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if retries > 0 {
                    debug!(retries, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if retries >= config.max_retries => {
                warn!(attempts = retries + 1, error = %e, "Giving up after repeated failures");
                return Err(e);
            }
            Err(e) => {
                retries += 1;
                let nominal = config.delay_for(retries);
                let delay = if config.use_jitter {
                    apply_jitter(nominal)
                } else {
                    nominal
                };

                warn!(
                    attempt = retries,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

fn apply_jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let factor = (RandomState::new().hash_one(std::time::SystemTime::now()) % 51) as f64 / 100.0 + 0.5;
    delay.mul_f64(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::new()
            .with_initial_delay(Duration::from_millis(5))
            .without_jitter()
    }

    #[tokio::test]
    async fn test_retry_returns_first_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>("connected")
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    if n < 2 {
                        Err(format!("refused #{}", n))
                    } else {
                        Ok(n)
                    }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_with_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(format!("refused #{}", n))
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        assert_eq!(result.unwrap_err(), "refused #2");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_delay_grows_and_caps() {
        let config = RetryConfig::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_max_delay(Duration::from_millis(350));

        assert_eq!(config.delay_for(1), Duration::from_millis(100));
        assert_eq!(config.delay_for(2), Duration::from_millis(200));
        assert_eq!(config.delay_for(3), Duration::from_millis(350));
        assert_eq!(config.delay_for(10), Duration::from_millis(350));
    }

    #[test]
    fn test_jitter_stays_within_half_to_full() {
        let delay = Duration::from_millis(1000);
        for _ in 0..20 {
            let jittered = apply_jitter(delay);
            assert!(jittered >= Duration::from_millis(500));
            assert!(jittered <= delay);
        }
    }
}
