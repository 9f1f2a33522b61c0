//! Phone link receive task
//!
//! Decodes frames from the phone and carries out what the router decides:
//! replies, weather holder and time zone updates, face events. Link health
//! is re-checked on a fixed tick.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Duration, Ticker};
use embedded_io_async::Read;

use sunshine_core::config::LinkConfig;
use sunshine_core::face::FaceEvent;
use sunshine_core::link::{LinkStatus, SyncAction, SyncRouter};
use sunshine_protocol::{Frame, FrameDecoder};

use crate::channels::{self, FACE_EVENTS, WATCH_TX, WEATHER};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// How often link health is re-evaluated
const LINK_CHECK_MS: u32 = 1000;

#[embassy_executor::task]
pub async fn sync_rx_task(mut rx: BufferedUartRx, link: LinkConfig) {
    info!("Sync RX task started");

    let mut decoder = FrameDecoder::new();
    let mut router = SyncRouter::new(&link);
    let mut ticker = Ticker::every(Duration::from_millis(LINK_CHECK_MS as u64));
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match select(rx.read(&mut buf), ticker.next()).await {
            Either::First(Ok(n)) => {
                trace!("RX: {} bytes", n);
                feed(&mut decoder, &mut router, &buf[..n]).await;
            }
            Either::First(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
            Either::Second(()) => {
                router.on_elapsed(LINK_CHECK_MS);
            }
        }

        match router.link_change() {
            Some(LinkStatus::Healthy) => {
                info!("Phone link up");
                FACE_EVENTS.send(FaceEvent::LinkUp).await;
            }
            Some(LinkStatus::Stale) => {
                warn!(
                    "Phone link lost after {} missed heartbeats",
                    router.monitor().missed_heartbeats()
                );
                FACE_EVENTS.send(FaceEvent::LinkLost).await;
            }
            None => {}
        }
    }
}

async fn feed(decoder: &mut FrameDecoder, router: &mut SyncRouter, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        let (result, used) = decoder.push_slice(bytes);
        bytes = &bytes[used..];

        match result {
            Ok(Some(frame)) => handle_frame(router, &frame).await,
            Ok(None) => {}
            Err(e) => {
                warn!("Frame decode error: {:?}", e);
            }
        }
    }
}

async fn handle_frame(router: &mut SyncRouter, frame: &Frame) {
    let action = match router.on_frame(frame, channels::is_sync_attached()) {
        Ok(action) => action,
        Err(e) => {
            warn!("Failed to parse phone message 0x{:02x}: {:?}", frame.kind, e);
            return;
        }
    };

    match action {
        SyncAction::Ignore => {
            trace!("Nothing to do for frame 0x{:02x}", frame.kind);
        }
        SyncAction::Reply(message) => {
            if WATCH_TX.try_send(message).is_err() {
                warn!("TX queue full, dropping {:?}", message);
            }
        }
        SyncAction::StoreTimeZone { time_zone, notify } => {
            channels::set_phone_time_zone(time_zone);
            if notify {
                FACE_EVENTS.send(FaceEvent::TimeZoneChanged(time_zone)).await;
            }
        }
        SyncAction::UpdateWeather(weather) => {
            if WEATHER.on_update(weather.clone()) {
                debug!(
                    "Weather {} / {} ({})",
                    weather.high.as_str(),
                    weather.low.as_str(),
                    weather.condition
                );
            }
            FACE_EVENTS.send(FaceEvent::WeatherUpdated(weather)).await;
        }
        SyncAction::ClearWeather { notify } => {
            if WEATHER.clear() {
                debug!("Weather cleared by phone");
                if notify {
                    FACE_EVENTS.send(FaceEvent::WeatherCleared).await;
                }
            }
        }
    }
}
