//! Bounded retry helper.
//!
//! The completion path retries with a flat attempt count: no backoff, no
//! jitter, and by default no distinction between transient and permanent
//! failures. [`RetryExecutor`] is the explicit helper that owns the loop and
//! returns the last error once attempts are exhausted.

use tracing::warn;

use crate::error::HubError;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts (1 = a single call, no retry)
    pub max_attempts: u32,
    /// Custom retry condition; defaults to [`HubError::is_retryable`]
    pub retry_condition: Option<fn(&HubError) -> bool>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_condition: None,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy that retries every error, the flat behavior of the completion
    /// forwarder.
    pub fn retry_all() -> Self {
        Self {
            max_attempts: 3,
            retry_condition: Some(|_| true),
        }
    }

    /// Set the total number of attempts.
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set a custom retry condition.
    pub fn with_retry_condition(mut self, condition: fn(&HubError) -> bool) -> Self {
        self.retry_condition = Some(condition);
        self
    }

    /// Check whether an error should be retried.
    pub fn should_retry(&self, error: &HubError) -> bool {
        match self.retry_condition {
            Some(condition) => condition(error),
            None => error.is_retryable(),
        }
    }
}

/// Executes an operation under a [`RetryPolicy`].
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create an executor for the given policy.
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Run `operation` until it succeeds or attempts are exhausted.
    ///
    /// Only the final failure is returned; intermediate failures are logged
    /// at `warn` level.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, HubError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, HubError>>,
    {
        let mut last_error = None;

        for attempt in 0..self.policy.max_attempts {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !self.policy.should_retry(&error) {
                        return Err(error);
                    }
                    if attempt + 1 < self.policy.max_attempts {
                        warn!(
                            attempt = attempt + 1,
                            max_attempts = self.policy.max_attempts,
                            error = %error,
                            "attempt failed, retrying"
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            HubError::InternalError("Retry executor finished without an error".to_string())
        }))
    }
}
