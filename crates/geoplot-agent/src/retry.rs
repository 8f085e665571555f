//! Transport-level retry with exponential backoff.
//!
//! Retries only transient transport failures (connection errors,
//! timeouts). Status-code handling is the caller's job — a 4xx or 5xx
//! response is returned as-is.

use std::future::Future;
use std::time::Duration;

/// Total attempts, including the first.
const MAX_ATTEMPTS: u32 = 3;

/// Backoff before the second attempt; doubles each retry (250ms, 500ms).
const BASE_DELAY_MS: u64 = 250;

/// Run `send` until it returns a response or the attempt budget is spent.
pub(crate) async fn send_with_backoff<F, Fut>(send: F) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut attempt = 0;
    loop {
        match send().await {
            Ok(response) => return Ok(response),
            Err(e) if attempt + 1 < MAX_ATTEMPTS => {
                let delay = Duration::from_millis(BASE_DELAY_MS << attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts = MAX_ATTEMPTS,
                    "transport error, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
