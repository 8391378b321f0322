// --- File: constants.rs ---
use glam::Vec4;

pub const WINDOW_TITLE: &str = "torus-life";

// Pixels outside the last full row/column of cells.
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
pub const ALIVE_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0); // Black
pub const DEAD_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0); // White

pub const FPS_UPDATE_INTERVAL_SECS: f64 = 1.0;
// --- End of File: constants.rs ---
