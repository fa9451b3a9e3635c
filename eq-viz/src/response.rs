use alloc::vec::Vec;

use crate::band::{Band, FilterType};
use crate::settings::EqSettings;
use crate::viewport::Viewport;

/// Gain in dB that a single band adds at `frequency`.
///
/// This is the display curve of the graphic EQ, not a biquad magnitude
/// response. Peaking bands are a bell over log2 distance whose width scales
/// with `q / 3`; shelves rise as `1 - e^-w` past their corner.
pub fn band_contribution(band: &Band, frequency: f32) -> f32 {
    if !band.is_enabled() {
        return 0.0;
    }
    let band_frequency = band.frequency();
    let gain = band.gain();

    match band.filter_type() {
        FilterType::Peaking => {
            let w = libm::log2f(frequency / band_frequency);
            let width = band.q() / 3.0;
            let x = w / width;
            gain / (1.0 + x * x)
        }
        FilterType::HighShelf => {
            if frequency >= band_frequency {
                let w = libm::log2f(frequency / band_frequency);
                gain * (1.0 - libm::expf(-w))
            } else {
                0.0
            }
        }
        FilterType::LowShelf => {
            if frequency <= band_frequency {
                let w = libm::log2f(band_frequency / frequency);
                gain * (1.0 - libm::expf(-w))
            } else {
                0.0
            }
        }
        FilterType::Unknown => 0.0,
    }
}

/// Net gain of the whole stack at `frequency`.
///
/// Returns 0 while the master switch is off, whatever the bands hold.
pub fn evaluate(settings: &EqSettings, frequency: f32) -> f32 {
    if !settings.is_enabled() {
        return 0.0;
    }
    settings
        .bands()
        .iter()
        .map(|band| band_contribution(band, frequency))
        .fold(settings.output_gain(), |total, gain| total + gain)
}

/// Samples the curve once per pixel column of `viewport`.
pub fn sample_curve(settings: &EqSettings, viewport: &Viewport) -> Vec<f32> {
    (0..viewport.width())
        .map(|x| evaluate(settings, viewport.column_frequency(x)))
        .collect()
}
