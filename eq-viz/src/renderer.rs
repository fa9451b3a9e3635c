use alloc::vec::Vec;

use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    geometry::Point,
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::color_strategy::*;
use crate::config::*;
use crate::format::{format_axis_gain, format_frequency};
use crate::response::sample_curve;
use crate::settings::EqSettings;
use crate::viewport::{round_px, Viewport};

pub trait Renderer {
    fn draw<D: DrawTarget<Color = Rgb888>>(
        &self,
        target: &mut D,
        settings: &EqSettings,
    ) -> Result<(), D::Error>;
}

/// Draws the EQ plot: background, grid, curve and one marker per band.
///
/// Drawing never touches the settings, so calling it again with the same
/// input produces the same pixels.
pub struct EqCurveRenderer<C = ClassicMarkerColor> {
    viewport: Viewport,
    marker_colors: C,
    labels: bool,
}

impl EqCurveRenderer<ClassicMarkerColor> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_marker_colors(viewport, ClassicMarkerColor)
    }
}

impl<C: MarkerColorStrategy> EqCurveRenderer<C> {
    pub fn with_marker_colors(viewport: Viewport, marker_colors: C) -> Self {
        #[cfg(feature = "std")]
        std::println!(
            "EqCurveRenderer::new called with width: {}, height: {}",
            viewport.width(),
            viewport.height()
        );
        #[cfg(feature = "logging")]
        info!(
            "EqCurveRenderer::new called with width: {}, height: {}",
            viewport.width(),
            viewport.height()
        );
        Self {
            viewport,
            marker_colors,
            labels: false,
        }
    }

    /// Turns the frequency and gain axis labels on or off.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Y of each horizontal grid line, one per `GRID_STEP_DB` inside the dB window.
    pub fn grid_rows(&self) -> Vec<i32> {
        let range = self.viewport.db_range() as i32;
        let first = -(range / GRID_STEP_DB) * GRID_STEP_DB;
        (first..=range)
            .step_by(GRID_STEP_DB as usize)
            .map(|db| round_px(self.viewport.gain_to_y(db as f32)))
            .collect()
    }

    /// X of each vertical grid line, one per standard band frequency.
    pub fn grid_columns(&self) -> Vec<i32> {
        STANDARD_FREQUENCIES
            .iter()
            .map(|&f| round_px(self.viewport.frequency_to_x(f)))
            .collect()
    }

    /// One point per pixel column, following the evaluated curve.
    pub fn curve_points(&self, settings: &EqSettings) -> Vec<Point> {
        sample_curve(settings, &self.viewport)
            .into_iter()
            .enumerate()
            .map(|(x, gain)| Point::new(x as i32, round_px(self.viewport.gain_to_y(gain))))
            .collect()
    }

    /// Marker centre of every band, in band order.
    pub fn marker_positions(&self, settings: &EqSettings) -> Vec<Point> {
        settings
            .bands()
            .iter()
            .map(|band| self.viewport.to_point(band.frequency(), band.gain()))
            .collect()
    }

    fn center_y(&self) -> i32 {
        round_px(self.viewport.center_y())
    }

    fn draw_background<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let width = self.viewport.width();
        let height = self.viewport.height();
        for y in 0..height {
            let t = if height > 1 {
                y as f32 / (height - 1) as f32
            } else {
                0.0
            };
            let row = Rectangle::new(Point::new(0, y as i32), Size::new(width, 1));
            target.fill_solid(&row, lerp_color(BACKGROUND_TOP, BACKGROUND_BOTTOM, t))?;
        }
        Ok(())
    }

    fn draw_grid<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let right = self.viewport.width() as i32 - 1;
        let bottom = self.viewport.height() as i32 - 1;
        let grid = PrimitiveStyle::with_stroke(GRID_COLOR, GRID_STROKE);

        for y in self.grid_rows() {
            Line::new(Point::new(0, y), Point::new(right, y))
                .into_styled(grid)
                .draw(target)?;
        }
        for x in self.grid_columns() {
            Line::new(Point::new(x, 0), Point::new(x, bottom))
                .into_styled(grid)
                .draw(target)?;
        }

        let center = self.center_y();
        Line::new(Point::new(0, center), Point::new(right, center))
            .into_styled(PrimitiveStyle::with_stroke(CENTER_LINE_COLOR, CENTER_LINE_STROKE))
            .draw(target)?;
        Ok(())
    }

    fn draw_curve<D>(&self, target: &mut D, settings: &EqSettings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let points = self.curve_points(settings);
        let style = PrimitiveStyle::with_stroke(CURVE_COLOR, CURVE_STROKE);
        for pair in points.windows(2) {
            Line::new(pair[0], pair[1]).into_styled(style).draw(target)?;
        }
        Ok(())
    }

    fn draw_markers<D>(&self, target: &mut D, settings: &EqSettings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let num_bands = settings.bands().len();
        let center = self.center_y();

        for (i, (band, position)) in settings
            .bands()
            .iter()
            .zip(self.marker_positions(settings))
            .enumerate()
        {
            let colors = self.marker_colors.marker_colors(&MarkerContext {
                band_index: i,
                num_bands,
                enabled: band.is_enabled(),
            });

            let style = PrimitiveStyleBuilder::new()
                .fill_color(colors.fill)
                .stroke_color(colors.outline)
                .stroke_width(MARKER_STROKE)
                .build();
            Circle::with_center(position, MARKER_RADIUS * 2)
                .into_styled(style)
                .draw(target)?;

            if band.is_enabled() {
                draw_dashed_vertical(target, position.x, position.y, center, colors.fill)?;
            }
        }
        Ok(())
    }

    fn draw_labels<D>(&self, target: &mut D, settings: &EqSettings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let character_style = MonoTextStyle::new(&FONT_6X10, LABEL_COLOR);
        let height = self.viewport.height() as i32;

        let bottom_centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Bottom)
            .build();
        for band in settings.bands() {
            let x = round_px(self.viewport.frequency_to_x(band.frequency()));
            Text::with_text_style(
                &format_frequency(band.frequency()),
                Point::new(x, height - 1),
                character_style,
                bottom_centered,
            )
            .draw(target)?;
        }

        let left_middle = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Middle)
            .build();
        let range = self.viewport.db_range();
        for gain in [range, range / 2.0, 0.0, -range / 2.0, -range] {
            let y = round_px(self.viewport.gain_to_y(gain)).clamp(5, (height - 6).max(5));
            Text::with_text_style(
                &format_axis_gain(gain),
                Point::new(2, y),
                character_style,
                left_middle,
            )
            .draw(target)?;
        }
        Ok(())
    }
}

impl<C: MarkerColorStrategy> Renderer for EqCurveRenderer<C> {
    fn draw<D>(&self, target: &mut D, settings: &EqSettings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let bounds = self.viewport.bounds();
        let mut target = target.clipped(&bounds);

        self.draw_background(&mut target)?;
        self.draw_grid(&mut target)?;
        if settings.is_enabled() {
            self.draw_curve(&mut target, settings)?;
        }
        self.draw_markers(&mut target, settings)?;
        if self.labels {
            self.draw_labels(&mut target, settings)?;
        }
        Ok(())
    }
}

/// Draws `settings` into `target` with the classic look.
pub fn render<D>(target: &mut D, settings: &EqSettings, viewport: Viewport) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    EqCurveRenderer::new(viewport).draw(target, settings)
}

fn lerp_color(from: Rgb888, to: Rgb888, t: f32) -> Rgb888 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb888::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

fn draw_dashed_vertical<D>(
    target: &mut D,
    x: i32,
    from_y: i32,
    to_y: i32,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let top = from_y.min(to_y);
    let bottom = from_y.max(to_y);
    let style = PrimitiveStyle::with_stroke(color, 1);
    let mut y = top;
    while y <= bottom {
        let end = (y + DASH_ON - 1).min(bottom);
        Line::new(Point::new(x, y), Point::new(x, end))
            .into_styled(style)
            .draw(target)?;
        y += DASH_ON + DASH_OFF;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::Band;
    use alloc::vec;

    #[test]
    fn test_grid_rows_every_five_db() {
        let renderer = EqCurveRenderer::new(Viewport::new(800, 400));
        assert_eq!(
            renderer.grid_rows(),
            vec![400, 350, 300, 250, 200, 150, 100, 50, 0]
        );
    }

    #[test]
    fn test_grid_columns_start_at_left_edge() {
        let renderer = EqCurveRenderer::new(Viewport::new(800, 400));
        let columns = renderer.grid_columns();
        assert_eq!(columns.len(), STANDARD_FREQUENCIES.len());
        assert_eq!(columns[0], 0);
        assert_eq!(*columns.last().unwrap(), 800);
        assert!(columns.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_flat_curve_sits_on_center_line() {
        let renderer = EqCurveRenderer::new(Viewport::new(200, 100));
        let mut settings = EqSettings::graphic();
        settings.enabled = true;
        let points = renderer.curve_points(&settings);
        assert_eq!(points.len(), 200);
        assert!(points.iter().enumerate().all(|(x, p)| p.x == x as i32 && p.y == 50));
    }

    #[test]
    fn test_marker_positions_follow_band_gain() {
        let renderer = EqCurveRenderer::new(Viewport::new(800, 400));
        let settings = EqSettings::new(
            true,
            vec![Band::peaking(31.0).with_gain(10.0), Band::peaking(16_000.0).with_gain(-20.0)],
            0.0,
        );
        let markers = renderer.marker_positions(&settings);
        assert_eq!(markers, vec![Point::new(0, 100), Point::new(800, 400)]);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        assert_eq!(lerp_color(BACKGROUND_TOP, BACKGROUND_BOTTOM, 0.0), BACKGROUND_TOP);
        assert_eq!(lerp_color(BACKGROUND_TOP, BACKGROUND_BOTTOM, 1.0), BACKGROUND_BOTTOM);
    }
}
