//! Phone Sync Protocol
//!
//! This crate defines the link between the paired phone and the watch. The
//! phone publishes path-addressed data items (today only `/weather`); the
//! watch answers heartbeats and asks for a resync when it attaches.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ KIND │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod data;
pub mod frame;
pub mod messages;

pub use data::{
    DataItem, DataValue, KEY_MAX_TEMP, KEY_MIN_TEMP, KEY_UTC_OFFSET, KEY_WEATHER_ID, PATH_TIME_ZONE,
    PATH_WEATHER,
};
pub use frame::{Frame, FrameDecoder, FrameError, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{PhoneMessage, WatchMessage};
