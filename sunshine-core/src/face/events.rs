//! Events delivered to the face

use crate::clock::TimeZone;
use crate::weather::Weather;

/// Tap gesture phases reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapType {
    /// Finger down
    Touch,
    /// Gesture abandoned
    TouchCancel,
    /// Completed tap
    Tap,
}

/// Events that drive the face state machine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    // Host display service
    /// Face shown or hidden
    VisibilityChanged(bool),
    /// `true` on entering ambient mode
    AmbientModeChanged(bool),
    /// Coarse once-a-minute tick, delivered in every mode
    TimeTick,
    /// Display capabilities
    PropertiesChanged { low_bit_ambient: bool },
    /// User touched the face
    Tap(TapType),
    /// Face torn down; terminal
    Destroy,

    // Self-scheduled
    /// The pending interactive tick fired
    Tick,

    // Phone sync channel
    /// New weather stored in the holder
    WeatherUpdated(Weather),
    /// Weather item deleted on the phone
    WeatherCleared,
    /// Phone pushed a new UTC offset
    TimeZoneChanged(TimeZone),
    /// Phone heard from again
    LinkUp,
    /// Phone missed too many heartbeats
    LinkLost,
}

impl FaceEvent {
    /// Check if this event comes from the host display service
    pub fn is_host_event(&self) -> bool {
        matches!(
            self,
            FaceEvent::VisibilityChanged(_)
                | FaceEvent::AmbientModeChanged(_)
                | FaceEvent::TimeTick
                | FaceEvent::PropertiesChanged { .. }
                | FaceEvent::Tap(_)
                | FaceEvent::Destroy
        )
    }

    /// Check if this event comes from the phone sync channel
    pub fn is_sync_event(&self) -> bool {
        matches!(
            self,
            FaceEvent::WeatherUpdated(_)
                | FaceEvent::WeatherCleared
                | FaceEvent::TimeZoneChanged(_)
                | FaceEvent::LinkUp
                | FaceEvent::LinkLost
        )
    }
}
