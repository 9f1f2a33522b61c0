//! Condition code to icon mapping
//!
//! Condition codes follow the OpenWeatherMap numbering the phone app already
//! uses. Ranges are matched in order, first match wins.

/// Small weather art drawn next to the temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    Clear,
    LightClouds,
    Clouds,
    LightRain,
    Rain,
    Snow,
    Fog,
    Storm,
}

impl WeatherIcon {
    pub const ALL: [WeatherIcon; 8] = [
        WeatherIcon::Clear,
        WeatherIcon::LightClouds,
        WeatherIcon::Clouds,
        WeatherIcon::LightRain,
        WeatherIcon::Rain,
        WeatherIcon::Snow,
        WeatherIcon::Fog,
        WeatherIcon::Storm,
    ];
}

/// Icon for a condition code, or `None` for codes without art
pub fn icon_for_condition(code: i32) -> Option<WeatherIcon> {
    match code {
        200..=232 => Some(WeatherIcon::Storm),
        300..=321 => Some(WeatherIcon::LightRain),
        500..=504 => Some(WeatherIcon::Rain),
        511 => Some(WeatherIcon::Snow),
        520..=531 => Some(WeatherIcon::Rain),
        600..=622 => Some(WeatherIcon::Snow),
        // 761 (dust) falls in the fog range first
        701..=761 => Some(WeatherIcon::Fog),
        781 => Some(WeatherIcon::Storm),
        800 => Some(WeatherIcon::Clear),
        801 => Some(WeatherIcon::LightClouds),
        802..=804 => Some(WeatherIcon::Clouds),
        _ => None,
    }
}
