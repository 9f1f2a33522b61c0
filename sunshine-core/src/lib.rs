//! Board-agnostic core logic for the Sunshine watch face
//!
//! This crate contains the whole display refresh loop without touching any
//! hardware:
//!
//! - Clock source (localized time and date strings)
//! - Weather state holder shared between the sync link and the renderer
//! - Face state machine deciding when to redraw and when to tick
//! - Layout composition (what goes where, in which colour)
//! - Link health monitoring for the phone sync channel
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod face;
pub mod layout;
pub mod link;
pub mod traits;
pub mod weather;
