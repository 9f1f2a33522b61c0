//! In-memory draw target for tests

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgb888) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.pixels.get((y as u32 * self.width + x as u32) as usize).copied()
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb888> + '_ {
        self.pixels.iter().copied()
    }

    /// Pixels of `color` in rows `from..to`
    pub fn count_in_rows(&self, from: i32, to: i32, color: Rgb888) -> usize {
        let from = from.max(0) as u32;
        let to = (to.max(0) as u32).min(self.height);
        (from..to)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixels[(y * self.width + x) as usize] == color)
            .count()
    }

    /// Bounding box of every pixel that differs from `background`
    pub fn painted_bounds(&self, background: Rgb888) -> Option<Rectangle> {
        let mut min: Option<Point> = None;
        let mut max = Point::zero();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.pixel(x, y) == Some(background) {
                    continue;
                }
                let p = Point::new(x, y);
                min = Some(min.map_or(p, |m| m.component_min(p)));
                max = max.component_max(p);
            }
        }
        min.map(|min| Rectangle::with_corners(min, max))
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }
        Ok(())
    }
}
