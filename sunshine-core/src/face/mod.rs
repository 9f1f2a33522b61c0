//! Face state machine
//!
//! Decides when the face redraws, when it schedules its own ticks and when
//! it listens to the phone. The state machine is explicit, finite and
//! deterministic.

pub mod events;
pub mod machine;
pub mod state;
pub mod timer;

pub use events::{FaceEvent, TapType};
pub use machine::{ChannelCommand, Response, TimerCommand, WatchFace};
pub use state::{Degradation, DisplayState, FaceState, PowerMode};
pub use timer::{delay_to_next_second, INTERACTIVE_UPDATE_RATE_MS};
