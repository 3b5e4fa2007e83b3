//! Retry policy implementation with a fixed delay.
//!
//! A [`RetryPolicy`] re-runs a whole operation up to a bounded number of
//! attempts, sleeping a fixed interval between attempts, but only while the
//! error it produces satisfies a retryable-error predicate. Any other error
//! is returned immediately.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Classification of errors that may succeed on a later attempt.
pub trait Retryable {
    /// Check if this error is transient.
    fn is_retryable(&self) -> bool;
}

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay between consecutive attempts
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Create a new retry config with custom attempt count (at least 1).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Create a new retry config with custom delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Retry policy for executing operations with automatic retries.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy with the given configuration.
    #[must_use]
    pub const fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Create a retry policy with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RetryConfig::default())
    }

    /// Check if another attempt should follow a failed `attempt` (1-based).
    #[must_use]
    pub const fn should_retry(&self, retryable: bool, attempt: u32) -> bool {
        retryable && attempt < self.config.max_attempts
    }

    /// Execute an async operation, retrying errors accepted by `is_retryable`.
    ///
    /// # Errors
    ///
    /// Returns the first non-retryable error, or the last error once all
    /// attempts are exhausted.
    pub async fn execute_with<F, Fut, T, E, P>(&self, mut operation: F, is_retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !self.should_retry(is_retryable(&error), attempt) {
                        return Err(error);
                    }
                    warn!(
                        attempt,
                        max_attempts = self.config.max_attempts,
                        delay_ms = u64::try_from(self.config.delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "Transient failure, retrying"
                    );
                    tokio::time::sleep(self.config.delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Execute an async operation, retrying errors that report themselves
    /// as [`Retryable`].
    ///
    /// # Errors
    ///
    /// See [`RetryPolicy::execute_with`].
    pub async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + std::fmt::Display,
    {
        self.execute_with(operation, E::is_retryable).await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::with_defaults()
    }
}
