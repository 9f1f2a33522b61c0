//! Time tick task
//!
//! Sends the host's coarse `TimeTick` on every minute boundary. In ambient
//! mode this is the only thing that moves the clock forward.

use defmt::*;
use embassy_time::Timer;

use sunshine_core::face::FaceEvent;

use crate::channels::FACE_EVENTS;
use crate::clock;

/// Time tick interval
const MINUTE_MS: i64 = 60_000;

#[embassy_executor::task]
pub async fn time_tick_task() {
    info!("Time tick task started");

    loop {
        let wait_ms = MINUTE_MS - clock::now_ms().rem_euclid(MINUTE_MS);
        Timer::after_millis(wait_ms as u64).await;

        if FACE_EVENTS.try_send(FaceEvent::TimeTick).is_err() {
            warn!("Face event channel full, dropping time tick");
        }
    }
}
