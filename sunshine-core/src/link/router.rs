//! Sync message routing
//!
//! Decides what each phone message means for the watch. The receive task
//! only carries the resulting actions out.
//!
//! - every valid frame is a heartbeat
//! - `PING` is answered with `PONG`
//! - weather updates are dropped while detached
//! - weather deletions and the time zone are stored even while detached;
//!   the face only hears about them when attached

use sunshine_protocol::{Frame, FrameError, PhoneMessage, WatchMessage, PATH_WEATHER};

use super::monitor::{LinkMonitor, LinkStatus};
use crate::clock::TimeZone;
use crate::config::LinkConfig;
use crate::weather::Weather;

/// What to do with one phone message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Nothing for the watch
    Ignore,
    /// Send this back to the phone
    Reply(WatchMessage),
    /// Store the phone's zone; tell the face if `notify`
    StoreTimeZone { time_zone: TimeZone, notify: bool },
    /// Store new weather and tell the face
    UpdateWeather(Weather),
    /// Clear the weather holder; tell the face if `notify`
    ClearWeather { notify: bool },
}

/// Route a parsed phone message
///
/// `attached` is whether the face currently listens to the sync channel.
pub fn route(message: &PhoneMessage, attached: bool) -> SyncAction {
    match message {
        PhoneMessage::Ping => SyncAction::Reply(WatchMessage::Pong),
        PhoneMessage::DataChanged(item) => {
            if let Some(time_zone) = TimeZone::from_data_item(item) {
                return SyncAction::StoreTimeZone {
                    time_zone,
                    notify: attached,
                };
            }
            if !attached {
                return SyncAction::Ignore;
            }
            match Weather::from_data_item(item) {
                Some(weather) => SyncAction::UpdateWeather(weather),
                None => SyncAction::Ignore,
            }
        }
        // Re-attaching cannot replay a deletion, so it always applies
        PhoneMessage::DataDeleted(path) if path.as_str() == PATH_WEATHER => {
            SyncAction::ClearWeather { notify: attached }
        }
        PhoneMessage::DataDeleted(_) => SyncAction::Ignore,
    }
}

/// Heartbeat tracking plus routing for the receive side of the link
#[derive(Debug, Clone)]
pub struct SyncRouter {
    monitor: LinkMonitor,
    /// Last status handed out by `link_change`
    reported: LinkStatus,
}

impl SyncRouter {
    pub fn new(config: &LinkConfig) -> Self {
        let monitor = LinkMonitor::with_config(config);
        let reported = monitor.status();
        Self { monitor, reported }
    }

    /// Handle one decoded frame
    ///
    /// The frame counts as a heartbeat even when its message does not parse.
    pub fn on_frame(&mut self, frame: &Frame, attached: bool) -> Result<SyncAction, FrameError> {
        self.monitor.heartbeat_received();
        let message = PhoneMessage::from_frame(frame)?;
        Ok(route(&message, attached))
    }

    /// Advance the heartbeat clock
    pub fn on_elapsed(&mut self, delta_ms: u32) {
        self.monitor.update_time(delta_ms);
    }

    /// New link status, once per transition
    pub fn link_change(&mut self) -> Option<LinkStatus> {
        let status = self.monitor.status();
        if status == self.reported {
            return None;
        }
        self.reported = status;
        Some(status)
    }

    pub fn monitor(&self) -> &LinkMonitor {
        &self.monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::HEARTBEAT_TIMEOUT_MS;
    use heapless::String;
    use sunshine_protocol::{
        DataItem, KEY_MAX_TEMP, KEY_MIN_TEMP, KEY_UTC_OFFSET, KEY_WEATHER_ID, PATH_TIME_ZONE,
    };

    fn weather_item() -> DataItem {
        let mut item = DataItem::new(PATH_WEATHER).unwrap();
        item.put_str(KEY_MAX_TEMP, "25°").unwrap();
        item.put_str(KEY_MIN_TEMP, "16°").unwrap();
        item.put_int(KEY_WEATHER_ID, 800).unwrap();
        item
    }

    fn zone_item(minutes: i32) -> DataItem {
        let mut item = DataItem::new(PATH_TIME_ZONE).unwrap();
        item.put_int(KEY_UTC_OFFSET, minutes).unwrap();
        item
    }

    fn deleted(path: &str) -> PhoneMessage {
        PhoneMessage::DataDeleted(String::try_from(path).unwrap())
    }

    #[test]
    fn test_ping_answered_with_pong() {
        assert_eq!(route(&PhoneMessage::Ping, true), SyncAction::Reply(WatchMessage::Pong));
        assert_eq!(route(&PhoneMessage::Ping, false), SyncAction::Reply(WatchMessage::Pong));
    }

    #[test]
    fn test_weather_update_when_attached() {
        let action = route(&PhoneMessage::DataChanged(weather_item()), true);
        assert_eq!(action, SyncAction::UpdateWeather(Weather::new("25°", "16°", 800).unwrap()));
    }

    #[test]
    fn test_weather_update_dropped_when_detached() {
        let action = route(&PhoneMessage::DataChanged(weather_item()), false);
        assert_eq!(action, SyncAction::Ignore);
    }

    #[test]
    fn test_time_zone_stored_when_detached() {
        let zone = TimeZone::from_offset_minutes(120).unwrap();

        let action = route(&PhoneMessage::DataChanged(zone_item(120)), false);
        assert_eq!(
            action,
            SyncAction::StoreTimeZone {
                time_zone: zone,
                notify: false
            }
        );

        let action = route(&PhoneMessage::DataChanged(zone_item(120)), true);
        assert_eq!(
            action,
            SyncAction::StoreTimeZone {
                time_zone: zone,
                notify: true
            }
        );
    }

    #[test]
    fn test_weather_delete_clears_even_when_detached() {
        assert_eq!(
            route(&deleted(PATH_WEATHER), false),
            SyncAction::ClearWeather { notify: false }
        );
        assert_eq!(
            route(&deleted(PATH_WEATHER), true),
            SyncAction::ClearWeather { notify: true }
        );
    }

    #[test]
    fn test_unknown_paths_ignored() {
        let other = DataItem::new("/steps").unwrap();
        assert_eq!(route(&PhoneMessage::DataChanged(other), true), SyncAction::Ignore);
        assert_eq!(route(&deleted("/steps"), true), SyncAction::Ignore);
        assert_eq!(route(&deleted(PATH_TIME_ZONE), true), SyncAction::Ignore);
    }

    #[test]
    fn test_any_frame_is_heartbeat() {
        let mut router = SyncRouter::new(&LinkConfig::default());
        router.on_elapsed(HEARTBEAT_TIMEOUT_MS * 2);
        assert_eq!(router.monitor().missed_heartbeats(), 2);

        // Unknown kind still proves the phone is there
        let garbage = Frame::empty(0x55);
        assert_eq!(router.on_frame(&garbage, true), Err(FrameError::Malformed));
        assert_eq!(router.monitor().missed_heartbeats(), 0);

        let ping = PhoneMessage::Ping.to_frame().unwrap();
        router.on_elapsed(HEARTBEAT_TIMEOUT_MS);
        assert_eq!(router.on_frame(&ping, false), Ok(SyncAction::Reply(WatchMessage::Pong)));
        assert_eq!(router.monitor().missed_heartbeats(), 0);
    }

    #[test]
    fn test_link_change_reported_once() {
        let mut router = SyncRouter::new(&LinkConfig::default());
        assert_eq!(router.link_change(), None);

        router.on_elapsed(HEARTBEAT_TIMEOUT_MS * 3);
        assert_eq!(router.link_change(), Some(LinkStatus::Stale));
        router.on_elapsed(HEARTBEAT_TIMEOUT_MS);
        assert_eq!(router.link_change(), None);

        let ping = PhoneMessage::Ping.to_frame().unwrap();
        router.on_frame(&ping, true).unwrap();
        assert_eq!(router.link_change(), Some(LinkStatus::Healthy));
        assert_eq!(router.link_change(), None);
    }
}
