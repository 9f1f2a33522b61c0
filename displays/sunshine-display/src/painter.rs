//! Scene painter
//!
//! Draws a composed [`Scene`] onto any embedded-graphics target. The target
//! is cleared first, so every call paints a complete frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use sunshine_core::config::Color;
use sunshine_core::layout::{LineOp, Scene, TextOp};

use crate::fonts::FontSet;
use crate::icons::draw_icon;

/// Luma at or above which a colour maps to white on low-bit panels
const LOW_BIT_THRESHOLD: u8 = 128;

/// Convert a palette colour to the target's colour
///
/// Without antialiasing every colour is forced to pure black or white.
pub fn ink<C: From<Rgb888>>(color: Color, antialias: bool) -> C {
    let color = if antialias {
        color
    } else if color.luma() >= LOW_BIT_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    };
    Rgb888::new(color.r(), color.g(), color.b()).into()
}

/// Paint one full frame
pub fn paint<D>(scene: &Scene, fonts: &FontSet, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    let antialias = scene.antialias;
    target.clear(ink(scene.background, antialias))?;

    if let Some(weather) = &scene.weather {
        draw_line(&weather.divider, antialias, target)?;
        if let Some(icon) = &weather.icon {
            draw_icon(icon, antialias, target)?;
        }
    }

    for op in scene.texts() {
        draw_text(op, fonts, antialias, target)?;
    }

    Ok(())
}

fn draw_text<D>(op: &TextOp, fonts: &FontSet, antialias: bool, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    let style = MonoTextStyle::new(fonts.font(op.role), ink(op.color, antialias));
    Text::with_baseline(&op.text, Point::new(op.x, op.baseline), style, Baseline::Alphabetic)
        .draw(target)?;
    Ok(())
}

fn draw_line<D>(op: &LineOp, antialias: bool, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    Line::new(Point::new(op.x0, op.y), Point::new(op.x1, op.y))
        .into_styled(PrimitiveStyle::with_stroke(ink(op.color, antialias), 1))
        .draw(target)
}
