//! Layout composition
//!
//! Time and date are centred on their baselines. When weather is present a
//! divider goes under the date and the temperatures go on the temperature
//! baseline: side by side in ambient mode, flanking the condition icon in
//! interactive mode.

use heapless::String;

use super::scene::{IconOp, LineOp, Scene, TextOp, WeatherRegion, TEXT_LEN};
use crate::clock::ClockSource;
use crate::config::{Color, FaceConfig};
use crate::face::{Degradation, DisplayState, PowerMode};
use crate::link::LinkStatus;
use crate::traits::{IconSource, TextMeasure, TextRole};
use crate::weather::Weather;

/// Colours for one frame
struct Inks {
    background: Color,
    time: Color,
    date: Color,
    high: Color,
    low: Color,
}

impl Inks {
    fn for_mode(config: &FaceConfig, mode: PowerMode) -> Self {
        let p = &config.palette;
        match mode {
            PowerMode::Interactive => Self {
                background: p.primary,
                time: p.digital_text,
                date: p.primary_light,
                high: p.digital_text,
                low: p.primary_light,
            },
            PowerMode::Ambient => Self {
                background: p.ambient_background,
                time: p.digital_text,
                date: p.digital_text,
                high: p.digital_text,
                low: p.digital_text,
            },
        }
    }
}

/// Compose one frame from a display state snapshot
pub fn compose<T, I>(state: &DisplayState, config: &FaceConfig, text: &T, icons: &I) -> Scene
where
    T: TextMeasure,
    I: IconSource,
{
    let dims = &config.dimensions;
    let cx = dims.center_x();
    let inks = Inks::for_mode(config, state.mode);

    let reading = ClockSource::new(state.time_zone, config.clock.locale).now(state.epoch_ms);

    let time = centered(text, TextRole::Time, &reading.time, cx, dims.time_y_offset, inks.time);
    let date = centered(text, TextRole::Date, &reading.date, cx, dims.date_y_offset, inks.date);

    let shown = state.weather.as_ref().filter(|w| w.has_temperatures());
    let weather = shown.map(|w| weather_region(w, state.mode, config, &inks, text, icons));

    let degradation = if shown.is_none() {
        Some(Degradation::MissingData)
    } else if state.link == LinkStatus::Stale {
        Some(Degradation::StaleChannel)
    } else {
        None
    };

    Scene {
        width: dims.width,
        height: dims.height,
        background: inks.background,
        antialias: !(state.mode == PowerMode::Ambient && state.low_bit_ambient),
        time,
        date,
        weather,
        degradation,
    }
}

fn weather_region<T, I>(
    weather: &Weather,
    mode: PowerMode,
    config: &FaceConfig,
    inks: &Inks,
    text: &T,
    icons: &I,
) -> WeatherRegion
where
    T: TextMeasure,
    I: IconSource,
{
    let dims = &config.dimensions;
    let cx = dims.center_x();
    let half = dims.divider_half_width as i32;
    let y = dims.temp_y_offset as i32;

    let divider = LineOp {
        x0: cx - half,
        x1: cx + half,
        y: dims.divider_y_offset as i32,
        color: inks.date,
    };

    let high_w = text.text_width(TextRole::Temperature, &weather.high) as i32;
    let low_w = text.text_width(TextRole::Temperature, &weather.low) as i32;

    // Ambient never shows art; unknown conditions have none to show
    let icon = match mode {
        PowerMode::Interactive => weather.icon(),
        PowerMode::Ambient => None,
    };

    let (high_x, low_x, icon) = match icon {
        Some(icon) => {
            let height = text.text_size(TextRole::Temperature);
            let (native_w, native_h) = icons.native_size(icon);
            let width = height * native_w / native_h.max(1);
            let half_w = width as i32 / 2;

            let op = IconOp {
                icon,
                x: cx - half_w,
                y: y - height as i32,
                width,
                height,
            };
            (cx - high_w - half_w, cx + half_w, Some(op))
        }
        None => {
            let gap = dims.ambient_temp_gap as i32;
            (cx - (high_w + low_w) / 2 - gap, cx + gap, None)
        }
    };

    WeatherRegion {
        divider,
        high: text_op(TextRole::Temperature, &weather.high, high_x, y, inks.high),
        low: text_op(TextRole::Temperature, &weather.low, low_x, y, inks.low),
        icon,
    }
}

fn centered<T: TextMeasure>(
    text: &T,
    role: TextRole,
    s: &str,
    cx: i32,
    baseline: u16,
    color: Color,
) -> TextOp {
    let width = text.text_width(role, s) as i32;
    text_op(role, s, cx - width / 2, baseline as i32, color)
}

fn text_op(role: TextRole, s: &str, x: i32, baseline: i32, color: Color) -> TextOp {
    let mut text = String::<TEXT_LEN>::new();
    // Inputs are bounded by the clock and weather capacities
    let _ = text.push_str(s);
    TextOp {
        role,
        text,
        x,
        baseline,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeZone;
    use crate::weather::WeatherIcon;

    /// 10 px per character, 20 px tall
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn text_width(&self, _role: TextRole, text: &str) -> u32 {
            text.chars().count() as u32 * 10
        }

        fn text_size(&self, _role: TextRole) -> u32 {
            20
        }
    }

    /// Every icon is 40 x 40, except clouds which are twice as wide
    struct Art;

    impl IconSource for Art {
        fn native_size(&self, icon: WeatherIcon) -> (u32, u32) {
            match icon {
                WeatherIcon::Clouds => (80, 40),
                _ => (40, 40),
            }
        }
    }

    /// 2026-03-04 14:03:07 UTC
    const WED_14_03_07: i64 = 1_772_632_987_000;

    fn state(mode: PowerMode, weather: Option<Weather>) -> DisplayState {
        DisplayState {
            epoch_ms: WED_14_03_07,
            time_zone: TimeZone::UTC,
            weather,
            mode,
            low_bit_ambient: false,
            link: LinkStatus::Healthy,
        }
    }

    fn weather(high: &str, low: &str, condition: i32) -> Option<Weather> {
        Weather::new(high, low, condition)
    }

    #[test]
    fn test_time_and_date_centered() {
        let config = FaceConfig::default();
        let scene = compose(&state(PowerMode::Interactive, None), &config, &FixedWidth, &Art);

        assert_eq!(scene.time.text.as_str(), "14:03");
        assert_eq!(scene.time.x, 120 - 25);
        assert_eq!(scene.time.baseline, config.dimensions.time_y_offset as i32);

        assert_eq!(scene.date.text.as_str(), "WED, MAR 4 2026");
        assert_eq!(scene.date.x, 120 - 75);
        assert_eq!(scene.date.baseline, config.dimensions.date_y_offset as i32);
    }

    #[test]
    fn test_no_weather_no_region() {
        let config = FaceConfig::default();
        let scene = compose(&state(PowerMode::Interactive, None), &config, &FixedWidth, &Art);
        assert_eq!(scene.weather, None);
        assert_eq!(scene.degradation, Some(Degradation::MissingData));
        assert_eq!(scene.texts().count(), 2);
    }

    #[test]
    fn test_empty_temperature_no_region() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Interactive, weather("", "54°", 800)),
            &config,
            &FixedWidth,
            &Art,
        );
        assert_eq!(scene.weather, None);
    }

    #[test]
    fn test_ambient_weather_plain_strings() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Ambient, weather("72°", "54°", 200)),
            &config,
            &FixedWidth,
            &Art,
        );

        assert_eq!(scene.background, config.palette.ambient_background);
        let region = scene.weather.unwrap();
        assert_eq!(region.icon, None);

        assert_eq!(region.high.text.as_str(), "72°");
        assert_eq!(region.low.text.as_str(), "54°");
        // (30 + 30) / 2 + gap 5
        assert_eq!(region.high.x, 120 - 30 - 5);
        assert_eq!(region.low.x, 125);

        let ink = config.palette.digital_text;
        assert_eq!(region.high.color, ink);
        assert_eq!(region.low.color, ink);
        assert_eq!(region.divider.color, ink);
        assert_eq!(scene.date.color, ink);
    }

    #[test]
    fn test_interactive_weather_with_icon() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Interactive, weather("25°", "16°", 800)),
            &config,
            &FixedWidth,
            &Art,
        );
        let region = scene.weather.unwrap();
        let temp_y = config.dimensions.temp_y_offset as i32;

        let icon = region.icon.unwrap();
        assert_eq!(icon.icon, WeatherIcon::Clear);
        assert_eq!((icon.width, icon.height), (20, 20));
        assert_eq!((icon.x, icon.y), (110, temp_y - 20));

        assert_eq!(region.high.x, 120 - 30 - 10);
        assert_eq!(region.low.x, 130);
        assert_eq!(region.high.baseline, temp_y);

        assert_eq!(scene.background, config.palette.primary);
        assert_eq!(region.high.color, config.palette.digital_text);
        assert_eq!(region.low.color, config.palette.primary_light);
        assert_eq!(region.divider.color, config.palette.primary_light);
        assert_eq!(scene.degradation, None);
    }

    #[test]
    fn test_icon_keeps_aspect_ratio() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Interactive, weather("25°", "16°", 803)),
            &config,
            &FixedWidth,
            &Art,
        );
        let icon = scene.weather.unwrap().icon.unwrap();
        assert_eq!((icon.width, icon.height), (40, 20));
        assert_eq!(icon.x, 100);
    }

    #[test]
    fn test_unknown_condition_falls_back_to_side_by_side() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Interactive, weather("25°", "16°", 999)),
            &config,
            &FixedWidth,
            &Art,
        );
        let region = scene.weather.unwrap();
        assert_eq!(region.icon, None);
        assert_eq!(region.high.x, 85);
        assert_eq!(region.low.x, 125);
        // Interactive colours still apply
        assert_eq!(region.low.color, config.palette.primary_light);
    }

    #[test]
    fn test_divider_spans_half_width() {
        let config = FaceConfig::default();
        let scene = compose(
            &state(PowerMode::Interactive, weather("1°", "0°", 600)),
            &config,
            &FixedWidth,
            &Art,
        );
        let divider = scene.weather.unwrap().divider;
        assert_eq!(divider.x0, 120 - 30);
        assert_eq!(divider.x1, 120 + 30);
        assert_eq!(divider.y, config.dimensions.divider_y_offset as i32);
    }

    #[test]
    fn test_low_bit_ambient_disables_antialias() {
        let config = FaceConfig::default();

        let mut s = state(PowerMode::Ambient, None);
        assert!(compose(&s, &config, &FixedWidth, &Art).antialias);

        s.low_bit_ambient = true;
        assert!(!compose(&s, &config, &FixedWidth, &Art).antialias);

        s.mode = PowerMode::Interactive;
        assert!(compose(&s, &config, &FixedWidth, &Art).antialias);
    }

    #[test]
    fn test_stale_link_keeps_last_weather() {
        let config = FaceConfig::default();
        let mut s = state(PowerMode::Interactive, weather("25°", "16°", 800));
        s.link = LinkStatus::Stale;

        let scene = compose(&s, &config, &FixedWidth, &Art);
        assert!(scene.weather.is_some());
        assert_eq!(scene.degradation, Some(Degradation::StaleChannel));
    }

    #[test]
    fn test_same_state_same_scene() {
        let config = FaceConfig::default();
        let s = state(PowerMode::Interactive, weather("72°", "54°", 200));
        assert_eq!(
            compose(&s, &config, &FixedWidth, &Art),
            compose(&s, &config, &FixedWidth, &Art)
        );
    }
}
