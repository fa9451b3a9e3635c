use alloc::vec::Vec;

use crate::band::*;
use crate::config::*;
use crate::response;

/// Band frequencies and Q values of the 8-band ALVAE layout.
pub const ALVAE_LAYOUT: [(f32, f32); 8] = [
    (60.0, 0.7),
    (120.0, 0.7),
    (250.0, 1.0),
    (500.0, 1.0),
    (1000.0, 1.0),
    (2000.0, 1.0),
    (4000.0, 0.7),
    (8000.0, 0.7),
];

/// The full state of one EQ instance.
///
/// Band order is display order only; the curve is a sum so order never changes it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", from = "RawSettings"))]
pub struct EqSettings {
    pub(crate) enabled: bool,
    pub(crate) bands: Vec<Band>,
    pub(crate) output_gain: f32,
    pub(crate) spectrum_enabled: bool,
}

/// Wire shape of the settings before clamping.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    enabled: bool,
    bands: Vec<Band>,
    output_gain: f32,
    #[serde(default = "default_spectrum_enabled")]
    spectrum_enabled: bool,
}

#[cfg(feature = "serde")]
fn default_spectrum_enabled() -> bool {
    true
}

#[cfg(feature = "serde")]
impl From<RawSettings> for EqSettings {
    fn from(raw: RawSettings) -> Self {
        let mut settings = EqSettings::new(raw.enabled, raw.bands, raw.output_gain);
        settings.spectrum_enabled = raw.spectrum_enabled;
        settings
    }
}

impl Default for EqSettings {
    fn default() -> Self {
        Self::graphic()
    }
}

impl EqSettings {
    /// Builds settings from an explicit band list. Values are clamped.
    pub fn new(enabled: bool, bands: Vec<Band>, output_gain: f32) -> Self {
        let mut settings = Self {
            enabled,
            bands,
            output_gain,
            spectrum_enabled: true,
        };
        settings.sanitize();
        settings
    }

    /// The 10-band graphic layout: a high shelf at 31 Hz followed by peaking
    /// bands on the standard octave centres. Bypassed until enabled.
    pub fn graphic() -> Self {
        let bands = STANDARD_FREQUENCIES
            .iter()
            .enumerate()
            .map(|(i, &frequency)| {
                let filter_type = if i == 0 {
                    FilterType::HighShelf
                } else {
                    FilterType::Peaking
                };
                Band::new(frequency, 0.0, DEFAULT_Q, filter_type)
            })
            .collect();
        Self::new(false, bands, 0.0)
    }

    /// The 8-band ALVAE layout, all peaking and enabled.
    pub fn alvae() -> Self {
        let bands = ALVAE_LAYOUT
            .iter()
            .map(|&(frequency, q)| Band::peaking(frequency).with_q(q))
            .collect();
        Self::new(true, bands, 0.0)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn band(&self, index: usize) -> Option<&Band> {
        self.bands.get(index)
    }

    pub fn output_gain(&self) -> f32 {
        self.output_gain
    }

    pub fn is_spectrum_enabled(&self) -> bool {
        self.spectrum_enabled
    }

    /// Net gain in dB at `frequency`. See [`response::evaluate`].
    pub fn gain_at(&self, frequency: f32) -> f32 {
        response::evaluate(self, frequency)
    }

    /// Re-clamps every stored value into its domain.
    pub fn sanitize(&mut self) {
        self.output_gain = clamp_gain(self.output_gain);
        for band in self.bands.iter_mut() {
            band.sanitize();
        }
    }
}
