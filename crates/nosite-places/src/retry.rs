//! Retry with exponential back-off and jitter for places API calls.
//!
//! Only transport-level trouble is retried. An upstream `"status"` such as
//! `OVER_QUERY_LIMIT` arrives inside a 200 response and is classified by the
//! discovery engine, not here.

use std::future::Future;
use std::time::Duration;

use crate::error::PlacesError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 429 and HTTP 5xx.
///
/// **Not retriable:** other 4xx statuses, malformed bodies, a bad base URL.
pub(crate) fn is_retriable(err: &PlacesError) -> bool {
    match err {
        PlacesError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        PlacesError::RateLimited => true,
        PlacesError::UnexpectedStatus { status, .. } => *status >= 500,
        PlacesError::Deserialize { .. } | PlacesError::InvalidBaseUrl { .. } => false,
    }
}

/// How many extra attempts a places call gets and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl RetryPolicy {
    const MAX_DELAY_MS: u64 = 30_000;

    pub(crate) const fn new(max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            max_retries,
            backoff_base_ms,
        }
    }

    /// Un-jittered delay before retry `attempt` (1-based), capped at 30 s.
    pub(crate) fn base_delay_ms(self, attempt: u32) -> u64 {
        let exponent = attempt.saturating_sub(1).min(10);
        self.backoff_base_ms
            .saturating_mul(1u64 << exponent)
            .min(Self::MAX_DELAY_MS)
    }

    /// `base_delay_ms` scaled by a random factor in `[0.75, 1.25)`.
    fn jittered_delay(self, attempt: u32) -> Duration {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let ms = (self.base_delay_ms(attempt) as f64 * rand::random_range(0.75..1.25)) as u64;
        Duration::from_millis(ms)
    }
}

/// Calls `operation` until it succeeds, fails permanently, or the policy's
/// retries for `endpoint` are spent.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    endpoint: &str,
    mut operation: F,
) -> Result<T, PlacesError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlacesError>>,
{
    let mut attempt = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if !is_retriable(&err) => return Err(err),
            Err(err) => err,
        };
        if attempt >= policy.max_retries {
            tracing::warn!(
                endpoint,
                attempts = attempt + 1,
                error = %err,
                "places call exhausted its retries"
            );
            return Err(err);
        }
        attempt += 1;
        let delay = policy.jittered_delay(attempt);
        tracing::warn!(
            endpoint,
            attempt,
            max_retries = policy.max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "transient places error, backing off"
        );
        tokio::time::sleep(delay).await;
    }
}
