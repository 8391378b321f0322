// --- File: error.rs ---

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid must have at least one column and one row.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested column count.
        width: usize,
        /// Requested row count.
        height: usize,
    },

    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("window size must be at least one pixel")]
    ZeroWindowSize,

    /// A single cell would not fit in the window.
    #[error("cell size {cell_size} exceeds window size {window_size}")]
    CellLargerThanWindow {
        /// Pixels per cell side.
        cell_size: u32,
        /// Pixels per window side.
        window_size: u32,
    },

    #[error("density divisor must be non-zero")]
    ZeroDensityDivisor,

    #[error("frame interval must be non-zero")]
    ZeroFrameInterval,
}
// --- End of File: error.rs ---
