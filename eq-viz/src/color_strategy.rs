use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use crate::config::*;

pub struct MarkerContext {
    pub band_index: usize,
    pub num_bands: usize,
    pub enabled: bool,
}

/// Fill and outline used for one band marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColors {
    pub fill: Rgb888,
    pub outline: Rgb888,
}

const DISABLED: MarkerColors = MarkerColors {
    fill: MARKER_FILL_DISABLED,
    outline: MARKER_OUTLINE_DISABLED,
};

pub trait MarkerColorStrategy {
    fn marker_colors(&self, context: &MarkerContext) -> MarkerColors;
}

fn map_position_to_rgb_on_wheel(pos: u8) -> Rgb888 {
    let pos = pos % 255;
    if pos < 85 {
        Rgb888::new(
            pos.saturating_mul(3),
            255u8.saturating_sub(pos.saturating_mul(3)),
            0,
        )
    } else if pos < 170 {
        let pos = pos.saturating_sub(85);
        Rgb888::new(
            255u8.saturating_sub(pos.saturating_mul(3)),
            0,
            pos.saturating_mul(3),
        )
    } else {
        let pos = pos.saturating_sub(170);
        Rgb888::new(
            0,
            pos.saturating_mul(3),
            255u8.saturating_sub(pos.saturating_mul(3)),
        )
    }
}

fn darken(color: Rgb888) -> Rgb888 {
    Rgb888::new(color.r() / 2, color.g() / 2, color.b() / 2)
}

/// Orange markers, grey when the band is off.
pub struct ClassicMarkerColor;
impl MarkerColorStrategy for ClassicMarkerColor {
    fn marker_colors(&self, context: &MarkerContext) -> MarkerColors {
        if !context.enabled {
            return DISABLED;
        }
        MarkerColors {
            fill: MARKER_FILL,
            outline: MARKER_OUTLINE,
        }
    }
}

/// Spreads the bands around the colour wheel.
pub struct SpectrumMarkerColor;
impl MarkerColorStrategy for SpectrumMarkerColor {
    fn marker_colors(&self, context: &MarkerContext) -> MarkerColors {
        if !context.enabled {
            return DISABLED;
        }
        let num_bands = context.num_bands.max(1) as u32;
        let position = ((context.band_index as u32 * 255 / num_bands) % 255) as u8;
        let fill = map_position_to_rgb_on_wheel(position);
        MarkerColors {
            fill,
            outline: darken(fill),
        }
    }
}

pub const ALVAE_PALETTE: [Rgb888; 8] = [
    Rgb888::new(0xff, 0x6b, 0x6b),
    Rgb888::new(0xee, 0x5a, 0x24),
    Rgb888::new(0xff, 0xc1, 0x07),
    Rgb888::new(0x10, 0xb9, 0x81),
    Rgb888::new(0x00, 0xff, 0xe7),
    Rgb888::new(0x09, 0x84, 0xe3),
    Rgb888::new(0x8b, 0x5c, 0xf6),
    Rgb888::new(0xe7, 0x4c, 0x3c),
];

/// Cycles through a fixed palette by band index.
pub struct PaletteMarkerColor {
    palette: &'static [Rgb888],
}
impl PaletteMarkerColor {
    pub fn new(palette: &'static [Rgb888]) -> Self {
        Self { palette }
    }

    pub fn alvae() -> Self {
        Self::new(&ALVAE_PALETTE)
    }
}
impl MarkerColorStrategy for PaletteMarkerColor {
    fn marker_colors(&self, context: &MarkerContext) -> MarkerColors {
        if !context.enabled || self.palette.is_empty() {
            return DISABLED;
        }
        let fill = self.palette[context.band_index % self.palette.len()];
        MarkerColors {
            fill,
            outline: darken(fill),
        }
    }
}
