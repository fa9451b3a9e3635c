#![cfg(feature = "serde")]

use eq_viz::config::*;
use eq_viz::{evaluate, Band, EqSettings, Equalizer, FilterType};

#[test]
fn test_settings_use_parent_field_names() {
    let json = serde_json::to_value(EqSettings::graphic()).unwrap();
    assert_eq!(json["enabled"], false);
    assert_eq!(json["outputGain"], 0.0);
    assert_eq!(json["spectrumEnabled"], true);
    assert_eq!(json["bands"][0]["freq"], 31.0);
    assert_eq!(json["bands"][0]["type"], "highshelf");
    assert_eq!(json["bands"][1]["type"], "peaking");
}

#[test]
fn test_incoming_settings_pass_through_the_component() {
    let json = r#"{
        "enabled": true,
        "outputGain": 45.0,
        "bands": [
            { "freq": 5.0, "gain": -90.0, "q": 0.0, "type": "lowShelf", "enabled": true },
            { "freq": 1000.0, "gain": 3.0, "q": 1.0, "type": "bandpass", "enabled": true }
        ]
    }"#;
    let settings: EqSettings = serde_json::from_str(json).unwrap();
    assert!(settings.is_spectrum_enabled());

    let eq = Equalizer::new(Some(settings));
    let settings = eq.settings();
    assert_eq!(settings.output_gain(), MAX_GAIN_DB);
    assert_eq!(settings.bands()[0].frequency(), MIN_FREQUENCY_HZ);
    assert_eq!(settings.bands()[0].gain(), MIN_GAIN_DB);
    assert_eq!(settings.bands()[0].q(), MIN_Q);
    assert_eq!(settings.bands()[0].filter_type(), FilterType::LowShelf);
    assert_eq!(settings.bands()[1].filter_type(), FilterType::Unknown);
    assert_eq!(eq.gain_at(1000.0), 20.0);
}

#[test]
fn test_deserialized_settings_are_clamped_without_the_component() {
    let json = r#"{"enabled":true,"outputGain":45.0,"bands":[{"freq":1000.0,"gain":-90.0,"q":0.0,"type":"peaking","enabled":true}]}"#;
    let settings: EqSettings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.output_gain(), MAX_GAIN_DB);
    assert_eq!(settings.bands()[0].gain(), MIN_GAIN_DB);
    assert_eq!(settings.bands()[0].q(), MIN_Q);
    assert_eq!(settings.gain_at(1000.0), 0.0);
    for f in [20.0, 500.0, 2000.0, 20_000.0] {
        let gain = evaluate(&settings, f);
        assert!(gain.is_finite());
        assert!(gain >= 0.0 && gain <= MAX_GAIN_DB);
    }
}

#[test]
fn test_deserialized_band_is_clamped() {
    let json = r#"{"freq":5.0,"gain":90.0,"q":-1.0,"type":"highShelf","enabled":false}"#;
    let band: Band = serde_json::from_str(json).unwrap();
    assert_eq!(band.frequency(), MIN_FREQUENCY_HZ);
    assert_eq!(band.gain(), MAX_GAIN_DB);
    assert_eq!(band.q(), MIN_Q);
    assert_eq!(band.filter_type(), FilterType::HighShelf);
    assert!(!band.is_enabled());
}

#[test]
fn test_spectrum_flag_survives_deserialization() {
    let json = r#"{"enabled":false,"outputGain":0.0,"bands":[],"spectrumEnabled":false}"#;
    let settings: EqSettings = serde_json::from_str(json).unwrap();
    assert!(!settings.is_spectrum_enabled());
    assert!(settings.bands().is_empty());
}
