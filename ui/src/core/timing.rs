//! Timer and clock helpers shared by the state machines.

use time::{macros::format_description, OffsetDateTime};

/// Suspend for `ms` milliseconds on the host's timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Suspend for `ms` milliseconds on the host's timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Human-readable client-local timestamp, e.g. `16.10.2026, 14:05:09`.
///
/// Falls back to UTC when the local offset cannot be determined.
pub fn local_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[day].[month].[year], [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| at.to_string())
}
