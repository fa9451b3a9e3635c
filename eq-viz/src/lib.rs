#![no_std]
//! Parametric EQ curve: band model, response evaluation, plotting onto an
//! `embedded-graphics` target and pointer editing of band gains.
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod band;
pub mod color_strategy;
pub mod config;
pub mod equalizer;
pub mod error;
pub mod format;
pub mod interaction;
pub mod presets;
pub mod renderer;
pub mod response;
pub mod settings;
pub mod viewport;

pub use band::{Band, BandUpdate, FilterType};
pub use equalizer::{Equalizer, SettingsListener};
pub use error::EqError;
pub use interaction::PointerEditor;
pub use renderer::{render, EqCurveRenderer, Renderer};
pub use response::{band_contribution, evaluate, sample_curve};
pub use settings::EqSettings;
pub use viewport::Viewport;
