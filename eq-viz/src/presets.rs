use crate::settings::EqSettings;

/// Short names of the ALVAE bands, low to high.
pub const ALVAE_BAND_NAMES: [&str; 8] = ["SUB", "BASS", "L-MID", "MID", "H-MID", "PRES", "BRIL", "AIR"];

/// New frequency, gain and Q for the band at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPatch {
    pub index: usize,
    pub frequency: f32,
    pub gain: f32,
    pub q: f32,
}

const fn patch(index: usize, frequency: f32, gain: f32, q: f32) -> BandPatch {
    BandPatch {
        index,
        frequency,
        gain,
        q,
    }
}

/// A named set of band patches. Bands it does not mention keep their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqPreset {
    pub name: &'static str,
    pub label: &'static str,
    /// Master switch to set, if any.
    pub enable: Option<bool>,
    /// Band count of the layout the patch indices refer to. `None` fits any layout.
    pub band_count: Option<usize>,
    pub patches: &'static [BandPatch],
}

impl EqPreset {
    /// Whether the patch indices line up with the bands of `settings`.
    pub fn fits(&self, settings: &EqSettings) -> bool {
        self.band_count.map_or(true, |count| count == settings.bands().len())
    }
}

/// Not one of the ALVAE presets. Zeroes gain on every band without moving
/// them, so it fits any layout.
pub const FLAT: EqPreset = EqPreset {
    name: "flat",
    label: "Flat",
    enable: None,
    band_count: None,
    patches: &[],
};

pub const VOCAL_CLARITY: EqPreset = EqPreset {
    name: "vocal_clarity",
    label: "Vocal Clarity",
    enable: None,
    band_count: Some(ALVAE_BAND_NAMES.len()),
    patches: &[
        patch(2, 200.0, -2.0, 1.5),
        patch(3, 800.0, 1.0, 1.2),
        patch(4, 2000.0, 2.0, 0.8),
        patch(5, 5000.0, 3.0, 1.0),
    ],
};

pub const BASS_POWER: EqPreset = EqPreset {
    name: "bass_power",
    label: "Bass Power",
    enable: None,
    band_count: Some(ALVAE_BAND_NAMES.len()),
    patches: &[
        patch(0, 60.0, 3.0, 0.8),
        patch(1, 120.0, 2.0, 1.0),
        patch(2, 300.0, -1.0, 1.5),
    ],
};

pub const OMNISCIENT_MASTER: EqPreset = EqPreset {
    name: "omniscient_master",
    label: "Omniscient Master",
    enable: None,
    band_count: Some(ALVAE_BAND_NAMES.len()),
    patches: &[
        patch(0, 60.0, 1.0, 0.7),
        patch(1, 120.0, 0.5, 0.8),
        patch(2, 250.0, -0.5, 1.2),
        patch(3, 500.0, 0.0, 1.0),
        patch(4, 1000.0, 0.5, 1.0),
        patch(5, 2000.0, 1.0, 0.9),
        patch(6, 4000.0, 1.5, 0.8),
        patch(7, 8000.0, 2.0, 0.7),
    ],
};

pub static PRESETS: [EqPreset; 4] = [FLAT, VOCAL_CLARITY, BASS_POWER, OMNISCIENT_MASTER];

pub fn find(name: &str) -> Option<&'static EqPreset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// Presets whose patches line up with the bands of `settings`.
pub fn fitting(settings: &EqSettings) -> impl Iterator<Item = &'static EqPreset> + '_ {
    PRESETS.iter().filter(move |preset| preset.fits(settings))
}

/// Writes `preset` into `settings`. Patches past the last band are skipped.
pub(crate) fn apply(preset: &EqPreset, settings: &mut EqSettings) {
    if preset.patches.is_empty() {
        for band in settings.bands.iter_mut() {
            band.set_gain(0.0);
        }
    }
    for p in preset.patches {
        if let Some(band) = settings.bands.get_mut(p.index) {
            band.set_frequency(p.frequency);
            band.set_gain(p.gain);
            band.set_q(p.q);
        }
    }
    if let Some(enabled) = preset.enable {
        settings.enabled = enabled;
    }
}
