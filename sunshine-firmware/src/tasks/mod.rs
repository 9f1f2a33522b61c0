//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod display;
pub mod face;
pub mod sync_rx;
pub mod sync_tx;
pub mod time_tick;

pub use button::button_task;
pub use display::display_task;
pub use face::face_task;
pub use sync_rx::sync_rx_task;
pub use sync_tx::sync_tx_task;
pub use time_tick::time_tick_task;
