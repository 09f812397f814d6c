//! Database connection acquisition with a bounded retry budget.
//!
//! The data source is assumed to suffer long transient outages (network
//! blips, maintenance windows), so acquisition trades responsiveness for
//! eventual success: up to 50 attempts, with a 15-minute pause on every
//! 10th failure. A single acquisition can block for hours in the worst
//! case. No exponential backoff, no jitter, no cancellation hook.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::warn;
use tokio_retry::RetryIf;

use crate::config::{CONNECT_PAUSE, MAX_CONNECT_ATTEMPTS, PAUSE_EVERY_ATTEMPTS};
use crate::error_handling::ConnectionError;

/// Delay schedule for connection attempts.
///
/// Yields one delay per failed attempt: a long pause on every
/// [`PAUSE_EVERY_ATTEMPTS`]-th failure (the first failure included) and an
/// immediate retry otherwise. The schedule is finite; exhausting it is what
/// bounds acquisition to [`MAX_CONNECT_ATTEMPTS`] attempts overall.
pub fn connect_retry_schedule() -> impl Iterator<Item = Duration> {
    (0..MAX_CONNECT_ATTEMPTS - 1).map(|failure| {
        if failure % PAUSE_EVERY_ATTEMPTS == 0 {
            CONNECT_PAUSE
        } else {
            Duration::ZERO
        }
    })
}

/// Opens a database connection, retrying transient failures.
///
/// `connect` is invoked once per attempt; the first successful connection
/// is returned immediately. Every failure is logged with the underlying
/// driver error before the next attempt. Once the budget is exhausted the
/// acquisition fails with [`ConnectionError::Exhausted`].
pub async fn acquire_connection<F, Fut, C>(connect: F) -> Result<C, ConnectionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<C, sqlx::Error>>,
{
    let failures = AtomicUsize::new(0);
    RetryIf::start(connect_retry_schedule(), connect, |e: &sqlx::Error| {
        let attempt = failures.fetch_add(1, Ordering::Relaxed) + 1;
        warn!("connection attempt {attempt}/{MAX_CONNECT_ATTEMPTS} failed: {e}");
        true
    })
    .await
    .map_err(|source| ConnectionError::Exhausted {
        attempts: failures.load(Ordering::Relaxed),
        source,
    })
}
