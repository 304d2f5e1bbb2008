use eframe::egui::Color32;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Settings of the field that can be changed at runtime.
///
/// Changes take effect on the next field reset.
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub ticks_per_second: f64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: Self::ROWS,
            columns: Self::COLUMNS,
            ticks_per_second: Self::TICKS_PER_SECOND,
            seed: None,
        }
    }
}

impl Config {
    pub const ROWS: usize = 30;
    pub const COLUMNS: usize = 30;
    pub const TICKS_PER_SECOND: f64 = 2.;
    pub const MAX_TICKS_PER_SECOND: f64 = 120.;
    pub const MAX_SIDE: usize = 2048;

    pub const WINDOW_SIZE: [f32; 2] = [960., 560.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 360.];
    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 360.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const ALIVE_SHADE: u8 = u8::MAX;
    pub const DEAD_SHADE: u8 = 0;

    pub const GAP_ABOVE_STATS: f32 = 30.;

    /// Process-wide settings; don't hold the guard across a call that locks it again.
    pub fn get() -> MutexGuard<'static, Config> {
        static CONFIG: OnceLock<Mutex<Config>> = OnceLock::new();
        CONFIG
            .get_or_init(|| Mutex::new(Config::default()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
