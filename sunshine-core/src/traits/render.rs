//! Rendering resources the layout needs from the display side

use crate::weather::WeatherIcon;

/// Which text a measurement is for; each role has its own font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRole {
    Time,
    Date,
    Temperature,
}

/// Text metrics for the fonts the painter will use
pub trait TextMeasure {
    /// Width of `text` in pixels
    fn text_width(&self, role: TextRole, text: &str) -> u32;

    /// Nominal text size (font height) in pixels
    fn text_size(&self, role: TextRole) -> u32;
}

/// Native sizes of the weather art
pub trait IconSource {
    /// `(width, height)` in pixels before scaling
    fn native_size(&self, icon: WeatherIcon) -> (u32, u32);
}
