//! Weather art
//!
//! Icons are drawn from primitives so they scale to whatever box the layout
//! asks for. Shapes are placed in percent of the box.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};

use sunshine_core::config::Color;
use sunshine_core::layout::IconOp;
use sunshine_core::traits::IconSource;
use sunshine_core::weather::WeatherIcon;

use crate::painter::ink;

const SUN: Color = Color(0xFFC107);
const CLOUD: Color = Color(0xECEFF1);
const CLOUD_BACK: Color = Color(0x90A4AE);
const RAIN: Color = Color(0x4FC3F7);
const SNOW: Color = Color::WHITE;
const FOG: Color = Color(0xB0BEC5);
const BOLT: Color = Color(0xFFEB3B);

/// Unscaled icon size in pixels
pub const fn native_size(icon: WeatherIcon) -> (u32, u32) {
    match icon {
        WeatherIcon::LightClouds | WeatherIcon::Clouds => (40, 32),
        WeatherIcon::Fog => (36, 32),
        _ => (32, 32),
    }
}

/// The built-in icon set
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherArt;

impl IconSource for WeatherArt {
    fn native_size(&self, icon: WeatherIcon) -> (u32, u32) {
        native_size(icon)
    }
}

/// Box in target pixels
#[derive(Clone, Copy)]
struct Frame {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Frame {
    fn point(&self, px: i32, py: i32) -> Point {
        Point::new(self.x + self.w * px / 100, self.y + self.h * py / 100)
    }

    fn width(&self, pct: i32) -> u32 {
        (self.w * pct / 100).max(1) as u32
    }

    fn height(&self, pct: i32) -> u32 {
        (self.h * pct / 100).max(1) as u32
    }

    fn sub(&self, px: i32, py: i32, pw: i32, ph: i32) -> Frame {
        Frame {
            x: self.x + self.w * px / 100,
            y: self.y + self.h * py / 100,
            w: self.w * pw / 100,
            h: self.h * ph / 100,
        }
    }
}

/// Draw one icon into its box
pub fn draw_icon<D>(op: &IconOp, antialias: bool, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    if op.width == 0 || op.height == 0 {
        return Ok(());
    }

    let frame = Frame {
        x: op.x,
        y: op.y,
        w: op.width as i32,
        h: op.height as i32,
    };
    let fill = |color: Color| PrimitiveStyle::with_fill(ink::<D::Color>(color, antialias));
    let stroke = |color: Color, width: u32| {
        PrimitiveStyle::with_stroke(ink::<D::Color>(color, antialias), width)
    };

    match op.icon {
        WeatherIcon::Clear => sun(&frame.sub(10, 10, 80, 80), fill(SUN), target),
        WeatherIcon::LightClouds => {
            sun(&frame.sub(0, 0, 55, 65), fill(SUN), target)?;
            cloud(&frame.sub(20, 35, 80, 65), fill(CLOUD), target)
        }
        WeatherIcon::Clouds => {
            cloud(&frame.sub(0, 0, 70, 60), fill(CLOUD_BACK), target)?;
            cloud(&frame.sub(20, 30, 80, 70), fill(CLOUD), target)
        }
        WeatherIcon::LightRain => {
            cloud(&frame.sub(0, 0, 100, 65), fill(CLOUD), target)?;
            drops(&frame.sub(20, 70, 60, 30), 2, stroke(RAIN, frame.width(8)), target)
        }
        WeatherIcon::Rain => {
            cloud(&frame.sub(0, 0, 100, 65), fill(CLOUD), target)?;
            drops(&frame.sub(10, 70, 80, 30), 3, stroke(RAIN, frame.width(8)), target)
        }
        WeatherIcon::Snow => {
            cloud(&frame.sub(0, 0, 100, 65), fill(CLOUD), target)?;
            flakes(&frame.sub(10, 72, 80, 28), fill(SNOW), target)
        }
        WeatherIcon::Fog => {
            for py in [15, 45, 75] {
                Rectangle::new(frame.point(0, py), Size::new(frame.width(100), frame.height(12)))
                    .into_styled(fill(FOG))
                    .draw(target)?;
            }
            Ok(())
        }
        WeatherIcon::Storm => {
            cloud(&frame.sub(0, 0, 100, 60), fill(CLOUD_BACK), target)?;
            bolt(&frame.sub(25, 45, 50, 55), fill(BOLT), target)
        }
    }
}

fn sun<D: DrawTarget>(f: &Frame, style: PrimitiveStyle<D::Color>, target: &mut D) -> Result<(), D::Error> {
    let diameter = f.w.min(f.h).max(1) as u32;
    Circle::new(f.point(0, 0), diameter)
        .into_styled(style)
        .draw(target)
}

fn cloud<D: DrawTarget>(f: &Frame, style: PrimitiveStyle<D::Color>, target: &mut D) -> Result<(), D::Error> {
    let base = Rectangle::new(f.point(0, 50), Size::new(f.width(100), f.height(50)));
    let radius = f.height(25);
    RoundedRectangle::with_equal_corners(base, Size::new(radius, radius))
        .into_styled(style)
        .draw(target)?;

    Circle::new(f.point(10, 25), f.height(60))
        .into_styled(style)
        .draw(target)?;
    Circle::new(f.point(35, 0), f.height(85))
        .into_styled(style)
        .draw(target)
}

fn drops<D: DrawTarget>(
    f: &Frame,
    count: i32,
    style: PrimitiveStyle<D::Color>,
    target: &mut D,
) -> Result<(), D::Error> {
    for i in 0..count {
        let px = (2 * i + 1) * 100 / (2 * count);
        Line::new(f.point(px + 10, 0), f.point(px, 100))
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

fn flakes<D: DrawTarget>(f: &Frame, style: PrimitiveStyle<D::Color>, target: &mut D) -> Result<(), D::Error> {
    let diameter = f.height(60);
    for px in [0, 40, 80] {
        Circle::new(f.point(px, 20), diameter)
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

fn bolt<D: DrawTarget>(f: &Frame, style: PrimitiveStyle<D::Color>, target: &mut D) -> Result<(), D::Error> {
    Triangle::new(f.point(60, 0), f.point(10, 60), f.point(55, 55))
        .into_styled(style)
        .draw(target)?;
    Triangle::new(f.point(45, 45), f.point(90, 40), f.point(30, 100))
        .into_styled(style)
        .draw(target)
}
