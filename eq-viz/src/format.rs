use alloc::{format, string::String};

/// `31` below 1 kHz, `1.0k` / `16.0k` above.
pub fn format_frequency(frequency: f32) -> String {
    if frequency >= 1000.0 {
        format!("{:.1}k", frequency / 1000.0)
    } else if libm::truncf(frequency) == frequency {
        format!("{:.0}", frequency)
    } else {
        format!("{}", frequency)
    }
}

/// One decimal with an explicit `+` on boosts.
pub fn format_gain(gain: f32) -> String {
    // -0.0 would otherwise print as "-0.0"
    let gain = if gain == 0.0 { 0.0 } else { gain };
    if gain > 0.0 {
        format!("+{:.1}", gain)
    } else {
        format!("{:.1}", gain)
    }
}

/// Whole-dB axis label: `+20`, `0`, `-10`.
pub fn format_axis_gain(gain: f32) -> String {
    if libm::roundf(gain) == 0.0 {
        String::from("0")
    } else {
        format!("{:+.0}", gain)
    }
}

/// Angle in degrees of a knob pointer sweeping -135..=135 over `min..=max`.
pub fn knob_rotation(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return -135.0;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    t * 270.0 - 135.0
}
