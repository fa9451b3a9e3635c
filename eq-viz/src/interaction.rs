use embedded_graphics::geometry::Point;

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::band::clamp_gain;
use crate::equalizer::Equalizer;
use crate::settings::EqSettings;
use crate::viewport::Viewport;

/// Index of the band whose marker column is closest to `x`. Ties go to the
/// lower index. `None` only when there are no bands.
pub fn nearest_band(settings: &EqSettings, viewport: &Viewport, x: f32) -> Option<usize> {
    let mut closest = None;
    let mut min_distance = f32::INFINITY;
    for (i, band) in settings.bands().iter().enumerate() {
        let distance = libm::fabsf(x - viewport.frequency_to_x(band.frequency()));
        if distance < min_distance {
            min_distance = distance;
            closest = Some(i);
        }
    }
    closest
}

/// Gain for a pointer at pixel row `y`, clamped to the band gain domain.
pub fn gain_at_pointer(viewport: &Viewport, y: f32) -> f32 {
    clamp_gain(viewport.y_to_gain(y))
}

/// Turns press / drag / release on the plot into band gain edits.
///
/// A press picks the nearest band and keeps it until release, so a drag keeps
/// editing the same band even when the pointer passes over another marker.
#[derive(Debug, Clone, Copy)]
pub struct PointerEditor {
    viewport: Viewport,
    selected: Option<usize>,
}

impl PointerEditor {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            selected: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selected_band(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects the nearest band and writes the gain under the pointer.
    /// Returns the edited band.
    pub fn press(&mut self, eq: &mut Equalizer, point: Point) -> Option<usize> {
        let index = nearest_band(eq.settings(), &self.viewport, point.x as f32)?;
        self.selected = Some(index);
        #[cfg(feature = "logging")]
        info!("pointer press selected band {}", index);
        self.apply(eq, index, point)
    }

    /// Re-applies the pointer gain to the selected band. No-op when nothing
    /// is pressed.
    pub fn drag(&mut self, eq: &mut Equalizer, point: Point) -> Option<usize> {
        let index = self.selected?;
        self.apply(eq, index, point)
    }

    /// Ends the interaction. Leaves the settings untouched.
    pub fn release(&mut self) {
        self.selected = None;
    }

    /// Pointer left the surface; same as a release.
    pub fn leave(&mut self) {
        self.release();
    }

    fn apply(&mut self, eq: &mut Equalizer, index: usize, point: Point) -> Option<usize> {
        let gain = gain_at_pointer(&self.viewport, point.y as f32);
        match eq.set_band_gain(index, gain) {
            Ok(()) => Some(index),
            Err(_) => {
                // Band list changed under us; drop the stale selection.
                self.selected = None;
                None
            }
        }
    }
}
