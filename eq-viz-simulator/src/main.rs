use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{
    sdl2::MouseButton,
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use eq_viz::{
    color_strategy::PaletteMarkerColor,
    format::{format_frequency, format_gain},
    presets::{self, ALVAE_BAND_NAMES},
    EqCurveRenderer, EqSettings, Equalizer, PointerEditor, Renderer, Viewport,
};
use std::{thread, time::Duration};

// Constants for the simulator window
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;
pub const FRAME_DELAY_MS: u64 = 16;

fn log_settings(settings: &EqSettings) {
    let gains: Vec<String> = settings
        .bands()
        .iter()
        .map(|b| format!("{}:{}", format_frequency(b.frequency()), format_gain(b.gain())))
        .collect();
    println!(
        "enabled={} out={} [{}]",
        settings.is_enabled(),
        format_gain(settings.output_gain()),
        gains.join(" ")
    );
}

fn main() -> Result<(), core::convert::Infallible> {
    let alvae = std::env::args().any(|arg| arg == "--alvae");

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WIDTH, HEIGHT));
    let mut window = Window::new(
        "Graphic EQ Simulator",
        &OutputSettingsBuilder::new().scale(1).build(),
    );

    let viewport = Viewport::new(WIDTH, HEIGHT);
    let initial = if alvae {
        println!("ALVAE bands: {}", ALVAE_BAND_NAMES.join(" "));
        EqSettings::alvae()
    } else {
        EqSettings::graphic()
    };
    let mut eq = Equalizer::new(Some(initial));
    eq.on_change(log_settings);
    let mut editor = PointerEditor::new(viewport);

    let classic = EqCurveRenderer::new(viewport).with_labels(true);
    let palette =
        EqCurveRenderer::with_marker_colors(viewport, PaletteMarkerColor::alvae()).with_labels(true);

    println!("left drag: edit gain | right click: bypass | middle click: reset | wheel: next preset");
    let mut preset_index = 0;

    'running: loop {
        display.clear(Rgb888::BLACK)?;
        if alvae {
            palette.draw(&mut display, eq.settings())?;
        } else {
            classic.draw(&mut display, eq.settings())?;
        }
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    editor.press(&mut eq, point);
                }
                SimulatorEvent::MouseMove { point } => {
                    editor.drag(&mut eq, point);
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => editor.release(),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Right,
                    ..
                } => {
                    let enabled = !eq.settings().is_enabled();
                    eq.set_enabled(enabled);
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Middle,
                    ..
                } => eq.reset(),
                SimulatorEvent::MouseWheel { .. } => {
                    // Band indices of a preset only mean something on its own layout.
                    let fitting: Vec<_> = presets::fitting(eq.settings()).collect();
                    if let Some(&preset) = fitting.get(preset_index % fitting.len().max(1)) {
                        println!("preset: {}", preset.label);
                        eq.apply_preset(preset);
                        preset_index += 1;
                    }
                }
                _ => {}
            }
        }

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }

    Ok(())
}
