#![allow(dead_code)]

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use eq_viz::{Band, EqSettings, FilterType};

/// Plain RGB framebuffer that records every pixel drawn inside its bounds.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb888>,
    pub out_of_bounds: usize,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
            out_of_bounds: 0,
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        self.index(Point::new(x, y)).map(|i| self.pixels[i])
    }

    pub fn count(&self, color: Rgb888) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    pub fn column_has(&self, x: i32, color: Rgb888) -> bool {
        (0..self.size.height as i32).any(|y| self.pixel(x, y) == Some(color))
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            match self.index(point) {
                Some(i) => self.pixels[i] = color,
                None => self.out_of_bounds += 1,
            }
        }
        Ok(())
    }
}

/// Enabled graphic layout where only `band` is switched on.
pub fn only_band(index: usize, frequency: f32, gain: f32, q: f32) -> EqSettings {
    let mut bands: Vec<Band> = EqSettings::graphic()
        .bands()
        .iter()
        .map(|b| b.with_enabled(false))
        .collect();
    bands[index] = Band::new(frequency, gain, q, FilterType::Peaking);
    EqSettings::new(true, bands, 0.0)
}

/// Log-spaced probe frequencies across the audible range.
pub fn probe_frequencies() -> Vec<f32> {
    (0..64)
        .map(|i| 20.0 * 1000f32.powf(i as f32 / 63.0))
        .collect()
}
