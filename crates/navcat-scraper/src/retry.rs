//! Retry helper for transient page-fetch failures.
//!
//! Uses a fixed delay between attempts rather than exponential growth; the
//! source shop throttles politely and a short constant pause is enough.

use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable: network-level failures and 5xx statuses. Non-retriable: 404
/// and other 4xx statuses, which would return the same result again.
fn is_retriable(err: &ScrapeError) -> bool {
    match err {
        ScrapeError::Http(_) => true,
        ScrapeError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        ScrapeError::NotFound { .. } => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional attempts with a fixed `delay_secs` pause before each retry.
///
/// Non-retriable errors are returned immediately; after the retry budget is
/// spent the last error is returned.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    delay_secs: u64,
    mut operation: F,
) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_secs,
                    error = %err,
                    "transient fetch error, retrying after delay"
                );
            }
        }

        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
