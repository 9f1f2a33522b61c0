//! Configuration type definitions
//!
//! These types describe how the face looks and behaves. The firmware embeds
//! them as postcard-serialized binary data generated from `face.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::{ClockSource, Locale, TimeZone};

/// 24-bit colour, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Rec. 601 luma, 0-255
    pub const fn luma(self) -> u8 {
        ((self.r() as u32 * 299 + self.g() as u32 * 587 + self.b() as u32 * 114) / 1000) as u8
    }
}

/// Face colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Interactive background
    pub primary: Color,
    /// Date, low temperature and divider in interactive mode
    pub primary_light: Color,
    /// Time and high temperature; every text in ambient mode
    pub digital_text: Color,
    /// Ambient background
    pub ambient_background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color(0x03A9F4),
            primary_light: Color(0xB3E5FC),
            digital_text: Color::WHITE,
            ambient_background: Color::BLACK,
        }
    }
}

/// Screen size and vertical placement, in pixels
///
/// Y offsets are text baselines measured from the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
    pub time_y_offset: u16,
    pub date_y_offset: u16,
    pub divider_y_offset: u16,
    pub divider_half_width: u16,
    pub temp_y_offset: u16,
    /// Space either side of the centre line between ambient temperatures
    pub ambient_temp_gap: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            time_y_offset: 92,
            date_y_offset: 122,
            divider_y_offset: 140,
            divider_half_width: 30,
            temp_y_offset: 185,
            ambient_temp_gap: 5,
        }
    }
}

impl Dimensions {
    pub fn center_x(&self) -> i32 {
        self.width as i32 / 2
    }
}

/// Clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    pub locale: Locale,
    /// Initial UTC offset in minutes, east positive
    pub utc_offset_minutes: i16,
}

impl ClockConfig {
    pub fn time_zone(&self) -> Option<TimeZone> {
        TimeZone::from_offset_minutes(self.utc_offset_minutes)
    }

    /// Clock source for these settings, UTC if the offset is invalid
    pub fn clock_source(&self) -> ClockSource {
        ClockSource::new(self.time_zone().unwrap_or(TimeZone::UTC), self.locale)
    }
}

/// Phone link health settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    pub heartbeat_timeout_ms: u32,
    pub max_missed_heartbeats: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            heartbeat_timeout_ms: crate::link::HEARTBEAT_TIMEOUT_MS,
            max_missed_heartbeats: crate::link::MAX_MISSED_HEARTBEATS,
        }
    }
}

/// Display power behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerConfig {
    /// Idle time before dropping to ambient, 0 = stay interactive
    pub ambient_after_ms: u32,
    /// Panel has reduced colour depth in ambient mode
    pub low_bit_ambient: bool,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            ambient_after_ms: 10_000,
            low_bit_ambient: false,
        }
    }
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    pub palette: Palette,
    pub dimensions: Dimensions,
    pub clock: ClockConfig,
    pub link: LinkConfig,
    pub power: PowerConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    InvalidScreenSize,
    /// A y offset lies below the bottom of the screen
    OffsetOutOfBounds,
    /// Divider is wider than the screen
    DividerTooWide,
    /// UTC offset is a day or more
    InvalidTimeZone,
    /// Heartbeat timeout or miss count is zero
    InvalidLinkTiming,
}

impl FaceConfig {
    /// Check the configuration is drawable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.dimensions;
        if d.width == 0 || d.height == 0 {
            return Err(ConfigError::InvalidScreenSize);
        }

        let offsets = [
            d.time_y_offset,
            d.date_y_offset,
            d.divider_y_offset,
            d.temp_y_offset,
        ];
        if offsets.iter().any(|&y| y > d.height) {
            return Err(ConfigError::OffsetOutOfBounds);
        }

        if d.divider_half_width as u32 * 2 > d.width as u32 {
            return Err(ConfigError::DividerTooWide);
        }

        if self.clock.time_zone().is_none() {
            return Err(ConfigError::InvalidTimeZone);
        }

        if self.link.heartbeat_timeout_ms == 0 || self.link.max_missed_heartbeats == 0 {
            return Err(ConfigError::InvalidLinkTiming);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FaceConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_color_channels() {
        let c = Color::rgb(0x03, 0xA9, 0xF4);
        assert_eq!(c, Color(0x03A9F4));
        assert_eq!((c.r(), c.g(), c.b()), (0x03, 0xA9, 0xF4));
        assert_eq!(Color::WHITE.luma(), 255);
        assert_eq!(Color::BLACK.luma(), 0);
    }

    #[test]
    fn test_zero_screen() {
        let mut config = FaceConfig::default();
        config.dimensions.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidScreenSize));
    }

    #[test]
    fn test_offset_below_screen() {
        let mut config = FaceConfig::default();
        config.dimensions.temp_y_offset = 241;
        assert_eq!(config.validate(), Err(ConfigError::OffsetOutOfBounds));
    }

    #[test]
    fn test_divider_too_wide() {
        let mut config = FaceConfig::default();
        config.dimensions.divider_half_width = 121;
        assert_eq!(config.validate(), Err(ConfigError::DividerTooWide));
    }

    #[test]
    fn test_bad_time_zone() {
        let mut config = FaceConfig::default();
        config.clock.utc_offset_minutes = 1440;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimeZone));
        // Clock still usable, falls back to UTC
        assert_eq!(config.clock.clock_source().time_zone(), TimeZone::UTC);
    }

    #[test]
    fn test_bad_link_timing() {
        let mut config = FaceConfig::default();
        config.link.max_missed_heartbeats = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidLinkTiming));
    }
}
