//! Weekday and month abbreviations
//!
//! Names are stored upper-case since the face only ever draws them that way.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display language for the date line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    #[default]
    English,
    German,
    French,
    Spanish,
}

const WEEKDAYS_EN: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
const WEEKDAYS_DE: [&str; 7] = ["MO.", "DI.", "MI.", "DO.", "FR.", "SA.", "SO."];
const WEEKDAYS_FR: [&str; 7] = ["LUN.", "MAR.", "MER.", "JEU.", "VEN.", "SAM.", "DIM."];
const WEEKDAYS_ES: [&str; 7] = ["LUN.", "MAR.", "MIÉ.", "JUE.", "VIE.", "SÁB.", "DOM."];

const MONTHS_EN: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const MONTHS_DE: [&str; 12] = [
    "JAN.", "FEB.", "MÄRZ", "APR.", "MAI", "JUNI", "JULI", "AUG.", "SEPT.", "OKT.", "NOV.", "DEZ.",
];
const MONTHS_FR: [&str; 12] = [
    "JANV.", "FÉVR.", "MARS", "AVR.", "MAI", "JUIN", "JUIL.", "AOÛT", "SEPT.", "OCT.", "NOV.",
    "DÉC.",
];
const MONTHS_ES: [&str; 12] = [
    "ENE.", "FEB.", "MAR.", "ABR.", "MAY.", "JUN.", "JUL.", "AGO.", "SEPT.", "OCT.", "NOV.", "DIC.",
];

impl Locale {
    /// Abbreviated weekday, Monday = 0
    pub fn weekday(self, days_from_monday: u32) -> &'static str {
        let names = match self {
            Locale::English => &WEEKDAYS_EN,
            Locale::German => &WEEKDAYS_DE,
            Locale::French => &WEEKDAYS_FR,
            Locale::Spanish => &WEEKDAYS_ES,
        };
        names[(days_from_monday % 7) as usize]
    }

    /// Abbreviated month, January = 1
    pub fn month(self, month: u32) -> &'static str {
        let names = match self {
            Locale::English => &MONTHS_EN,
            Locale::German => &MONTHS_DE,
            Locale::French => &MONTHS_FR,
            Locale::Spanish => &MONTHS_ES,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }
}
