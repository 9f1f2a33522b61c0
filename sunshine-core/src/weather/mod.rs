//! Weather state
//!
//! The phone pushes today's high/low (already formatted, unit included) and
//! a condition code. Nothing here validates ranges; the strings are drawn
//! as received.

pub mod holder;
pub mod icon;

pub use holder::WeatherHolder;
pub use icon::{icon_for_condition, WeatherIcon};

use heapless::String;
use sunshine_protocol::data::MAX_VALUE_LEN;
use sunshine_protocol::{DataItem, KEY_MAX_TEMP, KEY_MIN_TEMP, KEY_WEATHER_ID, PATH_WEATHER};

/// Capacity of a temperature string
pub const TEMP_LEN: usize = MAX_VALUE_LEN;

/// Today's forecast as pushed by the phone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Weather {
    /// High temperature, e.g. `25°`
    pub high: String<TEMP_LEN>,
    /// Low temperature, e.g. `16°`
    pub low: String<TEMP_LEN>,
    /// Condition code
    pub condition: i32,
}

impl Weather {
    /// Returns `None` if either string exceeds `TEMP_LEN` bytes
    pub fn new(high: &str, low: &str, condition: i32) -> Option<Self> {
        Some(Self {
            high: String::try_from(high).ok()?,
            low: String::try_from(low).ok()?,
            condition,
        })
    }

    /// Read the weather item published at `/weather`
    ///
    /// Items at other paths, or missing any of the three keys, yield `None`.
    pub fn from_data_item(item: &DataItem) -> Option<Self> {
        if item.path.as_str() != PATH_WEATHER {
            return None;
        }

        let condition = item.get_int(KEY_WEATHER_ID)?;
        let high = item.get_str(KEY_MAX_TEMP)?;
        let low = item.get_str(KEY_MIN_TEMP)?;
        Self::new(high, low, condition)
    }

    /// Whether the temperature region should be drawn at all
    pub fn has_temperatures(&self) -> bool {
        !self.high.is_empty() && !self.low.is_empty()
    }

    pub fn icon(&self) -> Option<WeatherIcon> {
        icon_for_condition(self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str) -> DataItem {
        let mut item = DataItem::new(path).unwrap();
        item.put_int(KEY_WEATHER_ID, 801).unwrap();
        item.put_str(KEY_MAX_TEMP, "21°").unwrap();
        item.put_str(KEY_MIN_TEMP, "12°").unwrap();
        item
    }

    #[test]
    fn test_from_weather_item() {
        let weather = Weather::from_data_item(&item(PATH_WEATHER)).unwrap();
        assert_eq!(weather.high.as_str(), "21°");
        assert_eq!(weather.low.as_str(), "12°");
        assert_eq!(weather.condition, 801);
        assert_eq!(weather.icon(), Some(WeatherIcon::LightClouds));
    }

    #[test]
    fn test_other_paths_ignored() {
        assert_eq!(Weather::from_data_item(&item("/weather/extra")), None);
        assert_eq!(Weather::from_data_item(&item("/forecast")), None);
    }

    #[test]
    fn test_missing_key_ignored() {
        let mut item = DataItem::new(PATH_WEATHER).unwrap();
        item.put_int(KEY_WEATHER_ID, 800).unwrap();
        item.put_str(KEY_MAX_TEMP, "30°").unwrap();
        assert_eq!(Weather::from_data_item(&item), None);
    }

    #[test]
    fn test_empty_temperature_hides_region() {
        assert!(Weather::new("25°", "16°", 800).unwrap().has_temperatures());
        assert!(!Weather::new("", "16°", 800).unwrap().has_temperatures());
        assert!(!Weather::new("25°", "", 800).unwrap().has_temperatures());
    }

    #[test]
    fn test_too_long() {
        assert_eq!(Weather::new("12345678901234567", "1", 800), None);
    }
}
