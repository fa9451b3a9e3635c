use embedded_graphics::{geometry::Point, geometry::Size, primitives::Rectangle};

use crate::config::*;

/// Maps between frequency/gain space and pixel space.
///
/// X is logarithmic in frequency, so equal distances are equal ratios.
/// Y is linear in dB with 0 dB on the vertical centre and `+db_range` at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    min_frequency: f32,
    max_frequency: f32,
    db_range: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_axes(
            width,
            height,
            AXIS_MIN_FREQUENCY_HZ,
            AXIS_MAX_FREQUENCY_HZ,
            AXIS_DB_RANGE,
        )
    }

    pub fn with_axes(
        width: u32,
        height: u32,
        min_frequency: f32,
        max_frequency: f32,
        db_range: f32,
    ) -> Self {
        let lo = min_frequency.min(max_frequency).max(1.0);
        let mut hi = min_frequency.max(max_frequency);
        if hi <= lo {
            hi = lo * 2.0;
        }
        let db_range = if db_range > 0.0 { db_range } else { AXIS_DB_RANGE };

        Self {
            width: width.max(1),
            height: height.max(1),
            min_frequency: lo,
            max_frequency: hi,
            db_range,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    pub fn min_frequency(&self) -> f32 {
        self.min_frequency
    }

    pub fn max_frequency(&self) -> f32 {
        self.max_frequency
    }

    pub fn db_range(&self) -> f32 {
        self.db_range
    }

    fn decades(&self) -> f32 {
        libm::log10f(self.max_frequency / self.min_frequency)
    }

    pub fn frequency_to_x(&self, frequency: f32) -> f32 {
        libm::log10f(frequency / self.min_frequency) / self.decades() * self.width as f32
    }

    pub fn x_to_frequency(&self, x: f32) -> f32 {
        self.min_frequency * libm::powf(10.0, x / self.width as f32 * self.decades())
    }

    /// Frequency sampled for pixel column `x`.
    pub fn column_frequency(&self, x: u32) -> f32 {
        let ratio = self.max_frequency / self.min_frequency;
        self.min_frequency * libm::powf(ratio, x as f32 / self.width as f32)
    }

    pub fn center_y(&self) -> f32 {
        self.height as f32 / 2.0
    }

    pub fn gain_to_y(&self, gain: f32) -> f32 {
        self.center_y() - gain / (2.0 * self.db_range) * self.height as f32
    }

    /// Inverse of [`gain_to_y`](Self::gain_to_y). Not clamped.
    pub fn y_to_gain(&self, y: f32) -> f32 {
        (self.center_y() - y) / self.height as f32 * 2.0 * self.db_range
    }

    pub fn to_point(&self, frequency: f32, gain: f32) -> Point {
        Point::new(
            round_px(self.frequency_to_x(frequency)),
            round_px(self.gain_to_y(gain)),
        )
    }
}

/// Rounds a pixel coordinate, saturating far-off values.
pub(crate) fn round_px(value: f32) -> i32 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value).clamp(i32::MIN as f32, i32::MAX as f32) as i32
}
