//! Face task
//!
//! Hosts the watch face state machine. Events and the pending tick are
//! handled one at a time, so the state machine never runs concurrently with
//! itself. A render pass composes a scene and hands it to the display task.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use sunshine_core::config::FaceConfig;
use sunshine_core::face::{ChannelCommand, FaceEvent, Response, TimerCommand, WatchFace};
use sunshine_display::{FontSet, WeatherArt};
use sunshine_protocol::WatchMessage;

use crate::channels::{self, DisplayCommand, DISPLAY_CMD, FACE_EVENTS, WATCH_TX, WEATHER};
use crate::clock;

#[embassy_executor::task]
pub async fn face_task(config: FaceConfig) {
    info!("Face task started");

    let mut face = WatchFace::new(config);
    let fonts = FontSet::default();
    let mut deadline: Option<Instant> = None;

    loop {
        let event = match deadline {
            Some(at) => match select(Timer::at(at), FACE_EVENTS.receive()).await {
                Either::First(()) => {
                    deadline = None;
                    FaceEvent::Tick
                }
                Either::Second(event) => event,
            },
            None => FACE_EVENTS.receive().await,
        };

        if event.is_host_event() {
            debug!("Host event: {:?}", event);
        } else if event.is_sync_event() {
            debug!("Sync event: {:?}", event);
        } else {
            trace!("Tick");
        }

        let was_visible = face.is_visible();
        let response = face.handle_event(event, clock::now_ms());
        apply(&mut face, &fonts, &mut deadline, response).await;

        if was_visible && !face.is_visible() {
            DISPLAY_CMD.signal(DisplayCommand::Sleep);
        }

        if face.state().is_destroyed() {
            info!("Face destroyed");
            return;
        }
    }
}

/// Carry out the host actions a response asks for
async fn apply(
    face: &mut WatchFace,
    fonts: &FontSet,
    deadline: &mut Option<Instant>,
    response: Response,
) {
    match response.timer {
        TimerCommand::Schedule { delay_ms } => {
            trace!("Tick in {} ms", delay_ms);
            *deadline = Some(Instant::now() + Duration::from_millis(delay_ms as u64));
        }
        TimerCommand::Cancel => {
            *deadline = None;
        }
        TimerCommand::None => {}
    }

    match response.channel {
        ChannelCommand::Attach => {
            channels::set_sync_attached(true);
            // Ask the phone to publish its current data again
            WATCH_TX.send(WatchMessage::SyncRequest).await;
            debug!("Sync channel attached");
        }
        ChannelCommand::Detach => {
            channels::set_sync_attached(false);
            debug!("Sync channel detached");
        }
        ChannelCommand::None => {}
    }

    if response.reload_time_zone {
        if let Some(time_zone) = channels::phone_time_zone() {
            if face.set_time_zone(time_zone) {
                debug!("Time zone now UTC{=i16} min", time_zone.offset_minutes());
            }
        }
    }

    if response.redraw && face.is_visible() {
        let scene = face.render(clock::now_ms(), WEATHER.current(), fonts, &WeatherArt);
        if let Some(degradation) = scene.degradation {
            trace!("Rendering degraded: {:?}", degradation);
        }
        DISPLAY_CMD.signal(DisplayCommand::Show(scene));
    }
}
