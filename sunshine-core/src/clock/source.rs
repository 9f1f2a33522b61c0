//! Wall-clock time formatted for the face
//!
//! Time is drawn as `HH:mm` (24-hour, zero padded) and the date as
//! `EEE, MMM d yyyy`, upper-case, e.g. `WED, MAR 4 2026`.

use core::fmt::Write;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use heapless::String;
use sunshine_protocol::{DataItem, KEY_UTC_OFFSET, PATH_TIME_ZONE};

use super::locale::Locale;

/// Capacity of the formatted time string
pub const TIME_LEN: usize = 8;

/// Capacity of the formatted date string
pub const DATE_LEN: usize = 32;

/// Largest UTC offset accepted, in minutes (exclusive)
const MAX_OFFSET_MINUTES: i16 = 24 * 60;

/// Fixed UTC offset
///
/// The watch has no tz database; the offset is configured or pushed by the
/// phone and replaced wholesale on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeZone {
    offset_minutes: i16,
}

impl TimeZone {
    pub const UTC: TimeZone = TimeZone { offset_minutes: 0 };

    /// Create a zone `offset_minutes` east of UTC
    ///
    /// Returns `None` if the offset is a day or more.
    pub const fn from_offset_minutes(offset_minutes: i16) -> Option<Self> {
        if offset_minutes <= -MAX_OFFSET_MINUTES || offset_minutes >= MAX_OFFSET_MINUTES {
            None
        } else {
            Some(Self { offset_minutes })
        }
    }

    pub const fn offset_minutes(&self) -> i16 {
        self.offset_minutes
    }

    /// Read the zone the phone published under `/timezone`
    pub fn from_data_item(item: &DataItem) -> Option<Self> {
        if item.path.as_str() != PATH_TIME_ZONE {
            return None;
        }
        let minutes = i16::try_from(item.get_int(KEY_UTC_OFFSET)?).ok()?;
        Self::from_offset_minutes(minutes)
    }

    fn to_fixed_offset(self) -> FixedOffset {
        // Range is enforced by the constructor
        FixedOffset::east_opt(self.offset_minutes as i32 * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Formatted time and date for one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    pub time: String<TIME_LEN>,
    pub date: String<DATE_LEN>,
}

/// Clock source for the face
///
/// A pure function of epoch time, time zone and locale. Timestamps chrono
/// cannot represent clamp to the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSource {
    time_zone: TimeZone,
    locale: Locale,
}

impl ClockSource {
    pub const fn new(time_zone: TimeZone, locale: Locale) -> Self {
        Self { time_zone, locale }
    }

    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    pub fn set_time_zone(&mut self, time_zone: TimeZone) {
        self.time_zone = time_zone;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format `epoch_ms` (milliseconds since the Unix epoch, UTC)
    pub fn now(&self, epoch_ms: i64) -> ClockReading {
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms).unwrap_or_default();
        let local = utc.with_timezone(&self.time_zone.to_fixed_offset());

        let mut reading = ClockReading::default();

        // Both strings are sized for the longest output
        let _ = write!(reading.time, "{:02}:{:02}", local.hour(), local.minute());
        let _ = write!(
            reading.date,
            "{}, {} {} {}",
            self.locale.weekday(local.weekday().num_days_from_monday()),
            self.locale.month(local.month()),
            local.day(),
            local.year()
        );

        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2026-03-04 14:03:07 UTC, a Wednesday
    const WED_14_03_07: i64 = 1_772_632_987_000;

    fn zone_item(path: &str, minutes: i32) -> DataItem {
        let mut item = DataItem::new(path).unwrap();
        item.put_int(KEY_UTC_OFFSET, minutes).unwrap();
        item
    }

    #[test]
    fn test_zone_from_data_item() {
        let zone = TimeZone::from_data_item(&zone_item(PATH_TIME_ZONE, -300)).unwrap();
        assert_eq!(zone.offset_minutes(), -300);
    }

    #[test]
    fn test_zone_item_rejected() {
        assert_eq!(TimeZone::from_data_item(&zone_item("/weather", 60)), None);
        assert_eq!(TimeZone::from_data_item(&zone_item(PATH_TIME_ZONE, 1440)), None);
        assert_eq!(TimeZone::from_data_item(&zone_item(PATH_TIME_ZONE, 70_000)), None);
        assert_eq!(TimeZone::from_data_item(&DataItem::new(PATH_TIME_ZONE).unwrap()), None);
    }

    #[test]
    fn test_utc_reading() {
        let clock = ClockSource::new(TimeZone::UTC, Locale::English);
        let reading = clock.now(WED_14_03_07);
        assert_eq!(reading.time.as_str(), "14:03");
        assert_eq!(reading.date.as_str(), "WED, MAR 4 2026");
    }

    #[test]
    fn test_offset_shifts_hour() {
        let east = ClockSource::new(TimeZone::from_offset_minutes(120).unwrap(), Locale::English);
        assert_eq!(east.now(WED_14_03_07).time.as_str(), "16:03");

        let west = ClockSource::new(TimeZone::from_offset_minutes(-300).unwrap(), Locale::English);
        assert_eq!(west.now(WED_14_03_07).time.as_str(), "09:03");
    }

    #[test]
    fn test_offset_crosses_midnight() {
        // 2026-03-04 23:30:00 UTC
        let clock = ClockSource::new(TimeZone::from_offset_minutes(60).unwrap(), Locale::English);
        let reading = clock.now(1_772_667_000_000);
        assert_eq!(reading.time.as_str(), "00:30");
        assert_eq!(reading.date.as_str(), "THU, MAR 5 2026");
    }

    #[test]
    fn test_localized_date() {
        let clock = ClockSource::new(TimeZone::UTC, Locale::German);
        assert_eq!(clock.now(WED_14_03_07).date.as_str(), "MI., MÄRZ 4 2026");
    }

    #[test]
    fn test_set_time_zone() {
        let mut clock = ClockSource::default();
        clock.set_time_zone(TimeZone::from_offset_minutes(330).unwrap());
        assert_eq!(clock.time_zone().offset_minutes(), 330);
        assert_eq!(clock.now(WED_14_03_07).time.as_str(), "19:33");
    }

    #[test]
    fn test_same_input_same_output() {
        let clock = ClockSource::new(TimeZone::from_offset_minutes(-420).unwrap(), Locale::French);
        assert_eq!(clock.now(WED_14_03_07), clock.now(WED_14_03_07));
    }

    #[test]
    fn test_out_of_range_clamps_to_epoch() {
        let clock = ClockSource::default();
        let reading = clock.now(i64::MAX);
        assert_eq!(reading.time.as_str(), "00:00");
        assert_eq!(reading.date.as_str(), "THU, JAN 1 1970");
    }

    #[test]
    fn test_offset_range() {
        assert!(TimeZone::from_offset_minutes(23 * 60 + 59).is_some());
        assert!(TimeZone::from_offset_minutes(24 * 60).is_none());
        assert!(TimeZone::from_offset_minutes(-24 * 60).is_none());
    }
}
