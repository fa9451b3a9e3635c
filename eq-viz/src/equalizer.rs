use alloc::boxed::Box;

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::band::*;
use crate::error::EqError;
use crate::presets::{self, EqPreset};
use crate::response;
use crate::settings::EqSettings;

/// Receives the full settings after every successful edit.
pub trait SettingsListener {
    fn on_settings_change(&mut self, settings: &EqSettings);
}

impl<F> SettingsListener for F
where
    F: FnMut(&EqSettings),
{
    fn on_settings_change(&mut self, settings: &EqSettings) {
        self(settings)
    }
}

/// An EQ instance: owns its settings and tells one listener about every change.
pub struct Equalizer {
    settings: EqSettings,
    listener: Option<Box<dyn SettingsListener>>,
}

impl Default for Equalizer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Equalizer {
    /// Seeds the instance from `initial_settings`, or the 10-band graphic
    /// layout when none is given. Initial values are re-clamped.
    pub fn new(initial_settings: Option<EqSettings>) -> Self {
        let mut settings = initial_settings.unwrap_or_default();
        settings.sanitize();
        #[cfg(feature = "std")]
        std::println!(
            "Equalizer::new with {} bands, enabled: {}",
            settings.bands().len(),
            settings.is_enabled()
        );
        #[cfg(feature = "logging")]
        info!(
            "Equalizer::new with {} bands, enabled: {}",
            settings.bands().len(),
            settings.is_enabled()
        );
        Self {
            settings,
            listener: None,
        }
    }

    /// Registers the change listener, replacing any previous one.
    pub fn on_change<L>(&mut self, listener: L)
    where
        L: SettingsListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn settings(&self) -> &EqSettings {
        &self.settings
    }

    pub fn into_settings(self) -> EqSettings {
        self.settings
    }

    pub fn num_bands(&self) -> usize {
        self.settings.bands.len()
    }

    pub fn gain_at(&self, frequency: f32) -> f32 {
        response::evaluate(&self.settings, frequency)
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_settings_change(&self.settings);
        }
    }

    fn band_mut(&mut self, index: usize) -> Result<&mut Band, EqError> {
        let len = self.settings.bands.len();
        self.settings
            .bands
            .get_mut(index)
            .ok_or(EqError::BandOutOfRange { index, len })
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
        self.notify();
    }

    pub fn set_spectrum_enabled(&mut self, enabled: bool) {
        self.settings.spectrum_enabled = enabled;
        self.notify();
    }

    pub fn set_output_gain(&mut self, gain: f32) {
        self.settings.output_gain = clamp_gain(gain);
        self.notify();
    }

    /// Applies a partial update to one band, then notifies once.
    pub fn update_band(&mut self, index: usize, update: BandUpdate) -> Result<(), EqError> {
        update.apply_to(self.band_mut(index)?);
        self.notify();
        Ok(())
    }

    pub fn set_band_gain(&mut self, index: usize, gain: f32) -> Result<(), EqError> {
        self.update_band(
            index,
            BandUpdate {
                gain: Some(gain),
                ..Default::default()
            },
        )
    }

    pub fn set_band_frequency(&mut self, index: usize, frequency: f32) -> Result<(), EqError> {
        self.update_band(
            index,
            BandUpdate {
                frequency: Some(frequency),
                ..Default::default()
            },
        )
    }

    pub fn set_band_q(&mut self, index: usize, q: f32) -> Result<(), EqError> {
        self.update_band(
            index,
            BandUpdate {
                q: Some(q),
                ..Default::default()
            },
        )
    }

    pub fn set_band_filter_type(
        &mut self,
        index: usize,
        filter_type: FilterType,
    ) -> Result<(), EqError> {
        self.update_band(
            index,
            BandUpdate {
                filter_type: Some(filter_type),
                ..Default::default()
            },
        )
    }

    pub fn set_band_enabled(&mut self, index: usize, enabled: bool) -> Result<(), EqError> {
        self.update_band(
            index,
            BandUpdate {
                enabled: Some(enabled),
                ..Default::default()
            },
        )
    }

    /// Zeroes every band gain and the output gain. Frequencies, Q, types and
    /// switches are kept.
    pub fn reset(&mut self) {
        for band in self.settings.bands.iter_mut() {
            band.set_gain(0.0);
        }
        self.settings.output_gain = 0.0;
        #[cfg(feature = "logging")]
        info!("EQ reset");
        self.notify();
    }

    pub fn apply_preset(&mut self, preset: &EqPreset) {
        presets::apply(preset, &mut self.settings);
        #[cfg(feature = "std")]
        std::println!("Applied preset {}", preset.name);
        #[cfg(feature = "logging")]
        info!("Applied preset {}", preset.name);
        self.notify();
    }

    pub fn apply_preset_by_name(&mut self, name: &str) -> Result<(), EqError> {
        let preset = presets::find(name).ok_or(EqError::UnknownPreset)?;
        self.apply_preset(preset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recording() -> (Equalizer, Rc<RefCell<Vec<EqSettings>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut eq = Equalizer::default();
        eq.on_change(move |settings: &EqSettings| sink.borrow_mut().push(settings.clone()));
        (eq, log)
    }

    #[test]
    fn test_every_edit_notifies_with_full_settings() {
        let (mut eq, log) = recording();
        eq.set_enabled(true);
        eq.set_band_gain(5, 6.0).unwrap();
        eq.set_output_gain(-2.0);

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert!(log[0].is_enabled());
        assert_eq!(log[1].bands()[5].gain(), 6.0);
        assert_eq!(log[1].bands().len(), 10);
        assert_eq!(log[2].output_gain(), -2.0);
        assert_eq!(&log[2], eq.settings());
    }

    #[test]
    fn test_out_of_range_band_is_rejected_without_notifying() {
        let (mut eq, log) = recording();
        let before = eq.settings().clone();
        assert_eq!(
            eq.set_band_gain(10, 3.0),
            Err(EqError::BandOutOfRange { index: 10, len: 10 })
        );
        assert_eq!(eq.settings(), &before);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_setters_clamp() {
        let mut eq = Equalizer::default();
        eq.set_band_gain(0, 35.0).unwrap();
        eq.set_band_q(0, 0.0).unwrap();
        eq.set_band_frequency(0, 1.0).unwrap();
        eq.set_output_gain(-100.0);
        let band = eq.settings().bands()[0];
        assert_eq!(band.gain(), MAX_GAIN_DB);
        assert_eq!(band.q(), MIN_Q);
        assert_eq!(band.frequency(), MIN_FREQUENCY_HZ);
        assert_eq!(eq.settings().output_gain(), MIN_GAIN_DB);
    }

    #[test]
    fn test_reset_keeps_everything_but_gains() {
        let mut eq = Equalizer::default();
        eq.set_enabled(true);
        eq.set_band_gain(2, 4.0).unwrap();
        eq.set_band_q(2, 2.0).unwrap();
        eq.set_band_enabled(3, false).unwrap();
        eq.set_band_filter_type(4, FilterType::LowShelf).unwrap();
        eq.set_output_gain(3.0);

        eq.reset();
        let settings = eq.settings();
        assert!(settings.is_enabled());
        assert_eq!(settings.output_gain(), 0.0);
        assert!(settings.bands().iter().all(|b| b.gain() == 0.0));
        assert_eq!(settings.bands()[2].q(), 2.0);
        assert!(!settings.bands()[3].is_enabled());
        assert_eq!(settings.bands()[4].filter_type(), FilterType::LowShelf);
    }

    #[test]
    fn test_master_toggle_round_trips_curve() {
        let mut eq = Equalizer::default();
        eq.set_enabled(true);
        eq.set_band_gain(3, 7.0).unwrap();
        eq.set_band_gain(8, -5.0).unwrap();
        eq.set_output_gain(1.5);
        let probes = [40.0, 250.0, 1200.0, 9000.0];
        let before: Vec<f32> = probes.iter().map(|&f| eq.gain_at(f)).collect();

        eq.set_enabled(false);
        assert!(probes.iter().all(|&f| eq.gain_at(f) == 0.0));

        eq.set_enabled(true);
        let after: Vec<f32> = probes.iter().map(|&f| eq.gain_at(f)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_initial_settings_are_sanitized() {
        let mut initial = EqSettings::alvae();
        initial.output_gain = 70.0;
        let eq = Equalizer::new(Some(initial));
        assert_eq!(eq.settings().output_gain(), MAX_GAIN_DB);
        assert_eq!(eq.num_bands(), 8);
    }

    #[test]
    fn test_unknown_preset_name() {
        let mut eq = Equalizer::default();
        assert_eq!(eq.apply_preset_by_name("no_such_preset"), Err(EqError::UnknownPreset));
    }
}
