//! Wall-clock time
//!
//! The board has no RTC, so wall-clock time is the build time plus the
//! uptime since boot.

use embassy_time::Instant;

include!(concat!(env!("OUT_DIR"), "/build_time.rs"));

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    BUILD_EPOCH_MS.saturating_add(Instant::now().as_millis() as i64)
}
