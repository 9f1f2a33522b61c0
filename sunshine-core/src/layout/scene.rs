//! Composed scene
//!
//! Everything the painter needs for one frame, already positioned and
//! coloured. Coordinates are pixels; text `x` is the left edge and `baseline`
//! the text baseline.

use heapless::String;

use crate::config::Color;
use crate::face::Degradation;
use crate::traits::TextRole;
use crate::weather::WeatherIcon;

/// Capacity of any single text in a scene
pub const TEXT_LEN: usize = 32;

/// A positioned string
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextOp {
    pub role: TextRole,
    pub text: String<TEXT_LEN>,
    pub x: i32,
    pub baseline: i32,
    pub color: Color,
}

/// Horizontal line from `x0` to `x1` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineOp {
    pub x0: i32,
    pub x1: i32,
    pub y: i32,
    pub color: Color,
}

/// Weather art scaled into a box, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconOp {
    pub icon: WeatherIcon,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Divider, temperatures and (interactive only) the condition icon
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherRegion {
    pub divider: LineOp,
    pub high: TextOp,
    pub low: TextOp,
    pub icon: Option<IconOp>,
}

/// One frame of the face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    pub width: u16,
    pub height: u16,
    pub background: Color,
    /// Smooth text edges; off for low-bit ambient panels
    pub antialias: bool,
    pub time: TextOp,
    pub date: TextOp,
    /// `None` while there is no weather to show
    pub weather: Option<WeatherRegion>,
    /// Reduced-service condition in effect when composed
    pub degradation: Option<Degradation>,
}

impl Scene {
    /// Every text in draw order
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        let weather = self
            .weather
            .as_ref()
            .map(|w| [&w.high, &w.low])
            .into_iter()
            .flatten();
        [&self.time, &self.date].into_iter().chain(weather)
    }
}
