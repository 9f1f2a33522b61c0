//! Face state machine
//!
//! All redraw and scheduling decisions are a function of the current state
//! and an event. The host owns the actual timer and sync channel and applies
//! the returned `Response`.
//!
//! A tick is pending only while the face is visible and interactive, and
//! never more than one at a time.

use super::events::FaceEvent;
use super::state::{DisplayState, FaceState, PowerMode};
use super::timer::delay_to_next_second;
use crate::clock::{ClockSource, TimeZone};
use crate::config::FaceConfig;
use crate::layout::{compose, Scene};
use crate::link::LinkStatus;
use crate::traits::{IconSource, TextMeasure};
use crate::weather::Weather;

/// What to do with the pending tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCommand {
    /// Leave it alone
    #[default]
    None,
    /// Drop the pending tick
    Cancel,
    /// Arm a tick `delay_ms` from now, replacing any pending one
    Schedule { delay_ms: u32 },
}

/// What to do with the phone sync channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelCommand {
    #[default]
    None,
    /// Start listening for data items
    Attach,
    /// Stop listening for data items
    Detach,
}

/// Host actions requested by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Compose and paint a new frame
    pub redraw: bool,
    pub timer: TimerCommand,
    pub channel: ChannelCommand,
    /// Re-read the current UTC offset; it may have changed while hidden
    pub reload_time_zone: bool,
}

impl Response {
    pub const NONE: Response = Response {
        redraw: false,
        timer: TimerCommand::None,
        channel: ChannelCommand::None,
        reload_time_zone: false,
    };

    fn redraw() -> Self {
        Response {
            redraw: true,
            ..Self::NONE
        }
    }
}

/// The watch face engine
#[derive(Debug, Clone)]
pub struct WatchFace {
    config: FaceConfig,
    clock: ClockSource,
    state: FaceState,
    visible: bool,
    mode: PowerMode,
    low_bit_ambient: bool,
    link: LinkStatus,
}

impl WatchFace {
    /// Create a hidden, interactive face with no tick pending
    pub fn new(config: FaceConfig) -> Self {
        Self {
            clock: config.clock.clock_source(),
            low_bit_ambient: config.power.low_bit_ambient,
            config,
            state: FaceState::Stopped,
            visible: false,
            mode: PowerMode::Interactive,
            link: LinkStatus::Healthy,
        }
    }

    pub fn state(&self) -> FaceState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    pub fn low_bit_ambient(&self) -> bool {
        self.low_bit_ambient
    }

    pub fn link_status(&self) -> LinkStatus {
        self.link
    }

    pub fn clock(&self) -> &ClockSource {
        &self.clock
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Apply a re-read UTC offset, returns `true` if it changed
    pub fn set_time_zone(&mut self, time_zone: TimeZone) -> bool {
        let changed = self.clock.time_zone() != time_zone;
        self.clock.set_time_zone(time_zone);
        changed
    }

    /// The tick should run only while visible and interactive
    fn should_timer_run(&self) -> bool {
        self.visible && self.mode == PowerMode::Interactive
    }

    /// Bring the pending tick in line with the guard
    fn update_timer(&mut self, now_ms: i64) -> TimerCommand {
        match (self.state, self.should_timer_run()) {
            (FaceState::Stopped, true) => {
                self.state = FaceState::Scheduled;
                TimerCommand::Schedule {
                    delay_ms: delay_to_next_second(now_ms),
                }
            }
            (FaceState::Scheduled, false) => {
                self.state = FaceState::Stopped;
                TimerCommand::Cancel
            }
            _ => TimerCommand::None,
        }
    }

    /// Process an event and return the host actions it requires
    ///
    /// `now_ms` is the current wall-clock time in epoch milliseconds.
    pub fn handle_event(&mut self, event: FaceEvent, now_ms: i64) -> Response {
        if self.state.is_destroyed() {
            return Response::NONE;
        }

        match event {
            FaceEvent::VisibilityChanged(visible) => {
                let mut response = Response::NONE;
                if visible {
                    if !self.visible {
                        response.channel = ChannelCommand::Attach;
                    }
                    response.reload_time_zone = true;
                    response.redraw = true;
                } else if self.visible {
                    response.channel = ChannelCommand::Detach;
                }
                self.visible = visible;
                response.timer = self.update_timer(now_ms);
                response
            }

            FaceEvent::AmbientModeChanged(ambient) => {
                let mode = if ambient {
                    PowerMode::Ambient
                } else {
                    PowerMode::Interactive
                };
                let mut response = Response::NONE;
                if mode != self.mode {
                    self.mode = mode;
                    response.redraw = true;
                }
                response.timer = self.update_timer(now_ms);
                response
            }

            FaceEvent::Tick => {
                if !self.state.is_scheduled() {
                    // Fired after a cancel was already applied
                    return Response::NONE;
                }
                // The pending tick has fired; arm the next one
                self.state = FaceState::Stopped;
                Response {
                    timer: self.update_timer(now_ms),
                    ..Response::redraw()
                }
            }

            FaceEvent::TimeTick
            | FaceEvent::WeatherUpdated(_)
            | FaceEvent::WeatherCleared
            | FaceEvent::Tap(_) => {
                Response::redraw()
            }

            FaceEvent::TimeZoneChanged(time_zone) => {
                self.clock.set_time_zone(time_zone);
                Response::redraw()
            }

            FaceEvent::PropertiesChanged { low_bit_ambient } => {
                self.low_bit_ambient = low_bit_ambient;
                Response::NONE
            }

            FaceEvent::LinkUp => {
                self.link = LinkStatus::Healthy;
                Response::NONE
            }

            FaceEvent::LinkLost => {
                self.link = LinkStatus::Stale;
                Response::NONE
            }

            FaceEvent::Destroy => {
                let response = Response {
                    timer: if self.state.is_scheduled() {
                        TimerCommand::Cancel
                    } else {
                        TimerCommand::None
                    },
                    channel: if self.visible {
                        ChannelCommand::Detach
                    } else {
                        ChannelCommand::None
                    },
                    ..Response::NONE
                };
                self.visible = false;
                self.state = FaceState::Destroyed;
                response
            }
        }
    }

    /// Snapshot for one render pass
    pub fn display_state(&self, epoch_ms: i64, weather: Option<Weather>) -> DisplayState {
        DisplayState {
            epoch_ms,
            time_zone: self.clock.time_zone(),
            weather,
            mode: self.mode,
            low_bit_ambient: self.low_bit_ambient,
            link: self.link,
        }
    }

    /// Compose the frame for `epoch_ms`
    pub fn render<T, I>(&self, epoch_ms: i64, weather: Option<Weather>, text: &T, icons: &I) -> Scene
    where
        T: TextMeasure,
        I: IconSource,
    {
        compose(&self.display_state(epoch_ms, weather), &self.config, text, icons)
    }
}
