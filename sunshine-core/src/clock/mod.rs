//! Clock source
//!
//! Turns epoch milliseconds into the time and date strings the face draws.

pub mod locale;
pub mod source;

pub use locale::Locale;
pub use source::{ClockReading, ClockSource, TimeZone, DATE_LEN, TIME_LEN};
