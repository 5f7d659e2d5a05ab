use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use backoff::{future::retry, ExponentialBackoff};
use log::warn;

/// Retry `f` up to `retry_times` extra times with exponential backoff
///
/// * `what` - short label for the retry log line
pub async fn retry_wrapper<I, E, F, Fut>(what: &str, retry_times: usize, f: F) -> Result<I, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<I, E>>,
    E: std::fmt::Display,
{
    let cur_times = AtomicUsize::new(0);
    retry(backoff_config(), || async {
        let times = cur_times.fetch_add(1, Ordering::AcqRel) + 1;
        if times > 1 {
            warn!("retrying {} for the {} time", what, times);
        }
        f().await
            .map_err(|err| {
                warn!("{} failed: {}", what, err);
                map_to_backoff_err(err, times, retry_times)
            })
    })
        .await
}

fn map_to_backoff_err<E>(err: E, cur_times: usize, retry_times: usize) -> backoff::Error<E> {
    if cur_times > retry_times {
        backoff::Error::permanent(err)
    } else {
        backoff::Error::transient(err)
    }
}

#[inline]
fn backoff_config() -> ExponentialBackoff {
    ExponentialBackoff {
        initial_interval: Duration::from_millis(1000),
        max_interval: Duration::from_millis(5000),
        max_elapsed_time: Some(Duration::from_secs(60)),
        ..Default::default()
    }
}
