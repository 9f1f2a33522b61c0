//! Button and power task
//!
//! Stands in for the host's visibility and ambient decisions:
//! - press while hidden shows the face, interactive
//! - press in ambient returns to interactive
//! - press while interactive is a tap
//! - long press hides the face
//! - no presses for `ambient_after_ms` enters ambient

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use sunshine_core::config::PowerConfig;
use sunshine_core::face::{FaceEvent, TapType};

use crate::channels::FACE_EVENTS;

/// Contact bounce settle time
const DEBOUNCE_MS: u64 = 20;

/// Settle time after release
const RELEASE_DEBOUNCE_MS: u64 = 50;

/// Hold time that counts as a long press
const LONG_PRESS_MS: u64 = 800;

#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, power: PowerConfig) {
    info!("Button task started");

    FACE_EVENTS
        .send(FaceEvent::PropertiesChanged {
            low_bit_ambient: power.low_bit_ambient,
        })
        .await;
    FACE_EVENTS.send(FaceEvent::VisibilityChanged(true)).await;

    let mut visible = true;
    let mut ambient = false;

    loop {
        let idle_ms = (visible && !ambient && power.ambient_after_ms > 0)
            .then_some(power.ambient_after_ms as u64);

        match select(button.wait_for_falling_edge(), idle(idle_ms)).await {
            Either::First(()) => {
                Timer::after_millis(DEBOUNCE_MS).await;
                if button.is_high() {
                    continue;
                }

                let touching = visible && !ambient;
                if touching {
                    FACE_EVENTS.send(FaceEvent::Tap(TapType::Touch)).await;
                }

                // Wait for release or long press timeout
                let long = with_timeout(Duration::from_millis(LONG_PRESS_MS), button.wait_for_high())
                    .await
                    .is_err();

                if long {
                    if touching {
                        FACE_EVENTS.send(FaceEvent::Tap(TapType::TouchCancel)).await;
                    }
                    if visible {
                        debug!("Long press, hiding face");
                        FACE_EVENTS.send(FaceEvent::VisibilityChanged(false)).await;
                        visible = false;
                    }
                    // Wait for actual release
                    button.wait_for_high().await;
                } else if !visible {
                    debug!("Waking face");
                    FACE_EVENTS.send(FaceEvent::VisibilityChanged(true)).await;
                    if ambient {
                        FACE_EVENTS.send(FaceEvent::AmbientModeChanged(false)).await;
                    }
                    visible = true;
                    ambient = false;
                } else if ambient {
                    debug!("Leaving ambient");
                    FACE_EVENTS.send(FaceEvent::AmbientModeChanged(false)).await;
                    ambient = false;
                } else {
                    FACE_EVENTS.send(FaceEvent::Tap(TapType::Tap)).await;
                }

                // Debounce after release
                Timer::after_millis(RELEASE_DEBOUNCE_MS).await;
            }
            Either::Second(()) => {
                debug!("Idle, entering ambient");
                FACE_EVENTS.send(FaceEvent::AmbientModeChanged(true)).await;
                ambient = true;
            }
        }
    }
}

/// Wait out the idle timeout, or forever without one
async fn idle(ms: Option<u64>) {
    match ms {
        Some(ms) => Timer::after_millis(ms).await,
        None => core::future::pending().await,
    }
}
