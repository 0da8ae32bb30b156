//! Retry policy for provider HTTP calls.
//!
//! Transient failures are retried with exponential back-off and jitter. A
//! rate-limit reply that names its own delay through `Retry-After` is waited
//! out exactly instead.

use std::future::Future;
use std::time::Duration;

use crate::error::ProviderError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a delay.
///
/// Timeouts, connection failures, rate limits and 5xx are transient. API
/// rejections such as 400/403, empty replies and malformed JSON are not.
pub(crate) fn is_retriable(err: &ProviderError) -> bool {
    match err {
        ProviderError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        ProviderError::Api { status, .. } => (500..600).contains(status),
        ProviderError::RateLimited { .. } => true,
        ProviderError::EmptyResponse
        | ProviderError::Deserialize { .. }
        | ProviderError::Config(_) => false,
    }
}

/// Delay before retry number `attempt` (1-based).
///
/// A server-supplied `Retry-After` wins, capped at 60 s. Otherwise the delay
/// is `backoff_base_ms × 2^(attempt-1)` capped at 60 s, then scaled by a
/// jitter factor in `[0.75, 1.25)`.
pub(crate) fn retry_delay(err: &ProviderError, attempt: u32, backoff_base_ms: u64) -> Duration {
    if let ProviderError::RateLimited {
        retry_after_secs: Some(secs),
        ..
    } = err
    {
        return Duration::from_millis(secs.saturating_mul(1_000).min(MAX_DELAY_MS));
    }
    let exponent = attempt.saturating_sub(1).min(10);
    let capped = backoff_base_ms
        .saturating_mul(1u64 << exponent)
        .min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
    Duration::from_millis(jittered)
}

/// Runs `operation`, retrying transient errors up to `max_retries` times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut retries = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if is_retriable(&err) && retries < max_retries => err,
            Err(err) => return Err(err),
        };
        retries += 1;
        let delay = retry_delay(&err, retries, backoff_base_ms);
        tracing::warn!(
            retry = retries,
            max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "provider request failed, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
