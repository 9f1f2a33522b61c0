//! Interactive tick alignment

/// Interactive redraw period
pub const INTERACTIVE_UPDATE_RATE_MS: u32 = 1000;

/// Delay until the next whole second of wall-clock time
///
/// Always in `1..=1000`, so a tick landing exactly on a boundary waits a
/// full period rather than firing twice.
pub fn delay_to_next_second(now_ms: i64) -> u32 {
    let rate = INTERACTIVE_UPDATE_RATE_MS as i64;
    (rate - now_ms.rem_euclid(rate)) as u32
}
