use core::str::FromStr;

use crate::config::*;

/// Shape of a single band's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterType {
    Peaking,
    #[cfg_attr(feature = "serde", serde(alias = "lowShelf"))]
    LowShelf,
    #[cfg_attr(feature = "serde", serde(alias = "highShelf"))]
    HighShelf,
    /// Any type name we do not recognise. Contributes no gain.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl FilterType {
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::Peaking => "peaking",
            FilterType::LowShelf => "lowshelf",
            FilterType::HighShelf => "highshelf",
            FilterType::Unknown => "unknown",
        }
    }
}

impl FromStr for FilterType {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter_type = if s.eq_ignore_ascii_case("peaking") {
            FilterType::Peaking
        } else if s.eq_ignore_ascii_case("lowshelf") {
            FilterType::LowShelf
        } else if s.eq_ignore_ascii_case("highshelf") {
            FilterType::HighShelf
        } else {
            FilterType::Unknown
        };
        Ok(filter_type)
    }
}

pub fn clamp_frequency(frequency: f32) -> f32 {
    if frequency.is_nan() {
        return MIN_FREQUENCY_HZ;
    }
    frequency.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ)
}

pub fn clamp_gain(gain: f32) -> f32 {
    if gain.is_nan() {
        return 0.0;
    }
    gain.clamp(MIN_GAIN_DB, MAX_GAIN_DB)
}

pub fn clamp_q(q: f32) -> f32 {
    if q.is_nan() {
        return DEFAULT_Q;
    }
    q.clamp(MIN_Q, MAX_Q)
}

/// One parametric filter stage.
///
/// Fields are private so every write goes through a clamping setter.
/// Deserialized bands are clamped too.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBand"))]
pub struct Band {
    #[cfg_attr(feature = "serde", serde(rename = "freq"))]
    frequency: f32,
    gain: f32,
    q: f32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    filter_type: FilterType,
    enabled: bool,
}

/// Wire shape of a band before clamping.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBand {
    freq: f32,
    gain: f32,
    q: f32,
    #[serde(rename = "type")]
    filter_type: FilterType,
    enabled: bool,
}

#[cfg(feature = "serde")]
impl From<RawBand> for Band {
    fn from(raw: RawBand) -> Self {
        Band::new(raw.freq, raw.gain, raw.q, raw.filter_type).with_enabled(raw.enabled)
    }
}

impl Band {
    pub fn new(frequency: f32, gain: f32, q: f32, filter_type: FilterType) -> Self {
        Self {
            frequency: clamp_frequency(frequency),
            gain: clamp_gain(gain),
            q: clamp_q(q),
            filter_type,
            enabled: true,
        }
    }

    pub fn peaking(frequency: f32) -> Self {
        Self::new(frequency, 0.0, DEFAULT_Q, FilterType::Peaking)
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.set_gain(gain);
        self
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.set_q(q);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn q(&self) -> f32 {
        self.q
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = clamp_frequency(frequency);
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = clamp_gain(gain);
    }

    pub fn set_q(&mut self, q: f32) {
        self.q = clamp_q(q);
    }

    pub fn set_filter_type(&mut self, filter_type: FilterType) {
        self.filter_type = filter_type;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Re-clamps every numeric field.
    pub fn sanitize(&mut self) {
        self.frequency = clamp_frequency(self.frequency);
        self.gain = clamp_gain(self.gain);
        self.q = clamp_q(self.q);
    }
}

/// Partial update for a band. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandUpdate {
    pub frequency: Option<f32>,
    pub gain: Option<f32>,
    pub q: Option<f32>,
    pub filter_type: Option<FilterType>,
    pub enabled: Option<bool>,
}

impl BandUpdate {
    pub fn apply_to(&self, band: &mut Band) {
        if let Some(frequency) = self.frequency {
            band.set_frequency(frequency);
        }
        if let Some(gain) = self.gain {
            band.set_gain(gain);
        }
        if let Some(q) = self.q {
            band.set_q(q);
        }
        if let Some(filter_type) = self.filter_type {
            band.set_filter_type(filter_type);
        }
        if let Some(enabled) = self.enabled {
            band.set_enabled(enabled);
        }
    }
}
