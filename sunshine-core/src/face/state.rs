//! Face states and the renderer's input snapshot

use crate::clock::TimeZone;
use crate::link::LinkStatus;
use crate::weather::Weather;

/// Display power mode, driven by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    #[default]
    Interactive,
    /// Low-power rendering, no self-scheduled ticks
    Ambient,
}

/// Scheduler states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    /// No tick pending
    Stopped,
    /// Exactly one tick pending
    Scheduled,
    /// Torn down; every later event is ignored
    Destroyed,
}

impl FaceState {
    /// Check if a tick is pending
    pub fn is_scheduled(&self) -> bool {
        matches!(self, FaceState::Scheduled)
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, FaceState::Destroyed)
    }
}

/// Reduced-service conditions; none of them are fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Degradation {
    /// No weather yet; the weather region is left out
    MissingData,
    /// Phone link lost; the last weather stays on screen
    StaleChannel,
}

/// Everything one render pass reads
///
/// Time fields are refreshed every pass, weather on push.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// Milliseconds since the Unix epoch, UTC
    pub epoch_ms: i64,
    pub time_zone: TimeZone,
    pub weather: Option<Weather>,
    pub mode: PowerMode,
    pub low_bit_ambient: bool,
    pub link: LinkStatus,
}
