//! Drawing side of the Sunshine face
//!
//! This crate provides:
//! - `FontSet`, the fonts for each text role (and their metrics for layout)
//! - `WeatherArt`, primitive-drawn condition icons
//! - `paint`, which draws a composed scene onto any embedded-graphics target
//! - `PanelBackend` trait for concrete panels
//!
//! # Architecture
//!
//! `sunshine-core` decides what goes where. This crate only turns the
//! resulting scene into pixels, so the same painter serves the ST7789 on the
//! watch board and an in-memory canvas in tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod fonts;
pub mod icons;
pub mod painter;

#[cfg(test)]
mod canvas;

// Re-export key types
pub use backend::{present, DisplayError, PanelBackend};
pub use fonts::FontSet;
pub use icons::{draw_icon, WeatherArt};
pub use painter::{ink, paint};
