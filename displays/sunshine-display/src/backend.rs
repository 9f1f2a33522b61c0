//! Panel backend trait
//!
//! Wraps the draw target of a concrete panel together with the few controls
//! the refresh loop needs beyond drawing.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use sunshine_core::layout::Scene;

use crate::fonts::FontSet;
use crate::painter::paint;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Panel not initialized
    NotInitialized,
}

/// A physical panel
pub trait PanelBackend {
    type Target: DrawTarget;

    /// Draw target for the next frame
    fn target(&mut self) -> &mut Self::Target;

    /// Switch the backlight
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Push buffered content to the panel
    ///
    /// Panels drawn directly over the bus can leave this empty.
    fn flush(&mut self) -> Result<(), DisplayError>;

    fn is_ready(&self) -> bool;
}

/// Paint a scene and push it to the panel
pub fn present<B>(backend: &mut B, scene: &Scene, fonts: &FontSet) -> Result<(), DisplayError>
where
    B: PanelBackend,
    <B::Target as DrawTarget>::Color: From<Rgb888>,
{
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }
    paint(scene, fonts, backend.target()).map_err(|_| DisplayError::Communication)?;
    backend.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::icons::WeatherArt;
    use sunshine_core::clock::TimeZone;
    use sunshine_core::config::FaceConfig;
    use sunshine_core::face::{DisplayState, PowerMode};
    use sunshine_core::layout::compose;
    use sunshine_core::link::LinkStatus;

    struct MockPanel {
        canvas: Canvas,
        ready: bool,
        backlight: bool,
        flushes: u32,
    }

    impl MockPanel {
        fn new(ready: bool) -> Self {
            Self {
                canvas: Canvas::new(240, 240, Rgb888::BLACK),
                ready,
                backlight: false,
                flushes: 0,
            }
        }
    }

    impl PanelBackend for MockPanel {
        type Target = Canvas;

        fn target(&mut self) -> &mut Canvas {
            &mut self.canvas
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
            self.backlight = on;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    fn scene() -> Scene {
        let state = DisplayState {
            epoch_ms: 1_772_632_987_000,
            time_zone: TimeZone::UTC,
            weather: None,
            mode: PowerMode::Interactive,
            low_bit_ambient: false,
            link: LinkStatus::Healthy,
        };
        compose(&state, &FaceConfig::default(), &FontSet::default(), &WeatherArt)
    }

    #[test]
    fn test_present_paints_and_flushes() {
        let mut panel = MockPanel::new(true);
        present(&mut panel, &scene(), &FontSet::default()).unwrap();
        assert_eq!(panel.flushes, 1);
        assert_ne!(panel.canvas.pixel(0, 0), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_present_requires_ready_panel() {
        let mut panel = MockPanel::new(false);
        assert_eq!(
            present(&mut panel, &scene(), &FontSet::default()),
            Err(DisplayError::NotInitialized)
        );
        assert_eq!(panel.flushes, 0);
        assert_eq!(panel.canvas.pixel(0, 0), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_backlight_toggle() {
        let mut panel = MockPanel::new(true);
        panel.set_backlight(true).unwrap();
        assert!(panel.backlight);
        panel.set_backlight(false).unwrap();
        assert!(!panel.backlight);
    }
}
