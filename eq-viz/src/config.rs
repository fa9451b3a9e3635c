use embedded_graphics::pixelcolor::Rgb888;

// --- Band Domain ---
pub const MIN_FREQUENCY_HZ: f32 = 20.0;
pub const MAX_FREQUENCY_HZ: f32 = 20_000.0;
pub const MIN_GAIN_DB: f32 = -20.0;
pub const MAX_GAIN_DB: f32 = 20.0;
pub const MIN_Q: f32 = 0.1; // Keeps the peaking width term away from zero
pub const MAX_Q: f32 = 10.0;
pub const DEFAULT_Q: f32 = 0.7;

// --- Graphic EQ Layout ---
pub const STANDARD_FREQUENCIES: [f32; 10] = [
    31.0, 62.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

// --- Viewport Defaults ---
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 400;
pub const AXIS_MIN_FREQUENCY_HZ: f32 = 31.0;
pub const AXIS_MAX_FREQUENCY_HZ: f32 = 16_000.0;
pub const AXIS_DB_RANGE: f32 = 20.0; // +/- dB mapped to full height

// --- Drawing ---
pub const GRID_STEP_DB: i32 = 5;
pub const GRID_STROKE: u32 = 1;
pub const CENTER_LINE_STROKE: u32 = 2;
pub const CURVE_STROKE: u32 = 3;
pub const MARKER_RADIUS: u32 = 8;
pub const MARKER_STROKE: u32 = 2;
pub const DASH_ON: i32 = 2;
pub const DASH_OFF: i32 = 2;

// --- Colors ---
pub const BACKGROUND_TOP: Rgb888 = Rgb888::new(0x1a, 0x1a, 0x1a);
pub const BACKGROUND_BOTTOM: Rgb888 = Rgb888::new(0x0a, 0x0a, 0x0a);
pub const GRID_COLOR: Rgb888 = Rgb888::new(0x33, 0x33, 0x33);
pub const CENTER_LINE_COLOR: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);
pub const CURVE_COLOR: Rgb888 = Rgb888::new(0x00, 0xff, 0xff);
pub const LABEL_COLOR: Rgb888 = Rgb888::new(0x88, 0x88, 0x88);
pub const MARKER_FILL: Rgb888 = Rgb888::new(0xff, 0x8c, 0x00);
pub const MARKER_OUTLINE: Rgb888 = Rgb888::new(0xff, 0x6b, 0x6b);
pub const MARKER_FILL_DISABLED: Rgb888 = Rgb888::new(0x66, 0x66, 0x66);
pub const MARKER_OUTLINE_DISABLED: Rgb888 = Rgb888::new(0x44, 0x44, 0x44);
