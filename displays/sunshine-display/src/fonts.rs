//! Fonts for each text role
//!
//! Date and temperature use ISO 8859-1 fonts so accented month names and the
//! degree sign render. The time only ever shows digits and a colon.

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::MonoFont;
use profont::PROFONT_24_POINT;

use sunshine_core::traits::{TextMeasure, TextRole};

/// Font per text role
#[derive(Clone, Copy)]
pub struct FontSet {
    pub time: &'static MonoFont<'static>,
    pub date: &'static MonoFont<'static>,
    pub temperature: &'static MonoFont<'static>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            time: &PROFONT_24_POINT,
            date: &FONT_9X15,
            temperature: &FONT_10X20,
        }
    }
}

impl FontSet {
    pub fn font(&self, role: TextRole) -> &'static MonoFont<'static> {
        match role {
            TextRole::Time => self.time,
            TextRole::Date => self.date,
            TextRole::Temperature => self.temperature,
        }
    }
}

impl TextMeasure for FontSet {
    fn text_width(&self, role: TextRole, text: &str) -> u32 {
        let font = self.font(role);
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        n * font.character_size.width + (n - 1) * font.character_spacing
    }

    fn text_size(&self, role: TextRole) -> u32 {
        self.font(role).character_size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let fonts = FontSet::default();
        let w = FONT_10X20.character_size.width;
        // '°' is two bytes in UTF-8
        assert_eq!(fonts.text_width(TextRole::Temperature, "25°"), 3 * w);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(FontSet::default().text_width(TextRole::Date, ""), 0);
    }

    #[test]
    fn test_sizes_follow_fonts() {
        let fonts = FontSet::default();
        assert_eq!(fonts.text_size(TextRole::Temperature), FONT_10X20.character_size.height);
        assert_eq!(fonts.text_size(TextRole::Time), PROFONT_24_POINT.character_size.height);
    }
}
