// --- File: lib.rs ---
// Game of Life engine: `Grid` (cells plus the B3/S23 rule) and `Simulation`
// (double-buffered generations). Windowing and drawing live in the binary.

pub mod config;
pub mod error;
pub mod grid;
pub mod simulation;

pub use config::{Args, LifeConfig};
pub use error::ConfigError;
pub use grid::Grid;
pub use simulation::Simulation;
// --- End of File: lib.rs ---
