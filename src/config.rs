// --- File: config.rs ---
use crate::error::ConfigError;
use clap::Parser;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const DEFAULT_CELL_SIZE: u32 = 5;
pub const DEFAULT_WINDOW_SIZE: u32 = 800;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;
// One random pick per this many cells when seeding.
pub const DEFAULT_DENSITY_DIVISOR: usize = 15;

/// Command-line flags. Converted into a [`LifeConfig`] before use.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "torus-life",
    version,
    about = "Conway's Game of Life on a toroidal grid"
)]
pub struct Args {
    /// The pixel size of each cell.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// The pixel size of one side of the square window.
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: u32,

    /// Minimum milliseconds between generations.
    #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
    pub frame_interval_ms: u64,

    /// Seeding density: width * height / divisor random cells are set alive.
    #[arg(long, default_value_t = DEFAULT_DENSITY_DIVISOR)]
    pub density_divisor: usize,

    /// RNG seed for the initial population. Defaults to the system clock.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub cell_size: u32,
    pub window_size: u32,
    pub frame_interval: Duration,
    pub density_divisor: usize,
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            density_divisor: DEFAULT_DENSITY_DIVISOR,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Checks every field; the rest of the program assumes a validated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        if self.cell_size > self.window_size {
            return Err(ConfigError::CellLargerThanWindow {
                cell_size: self.cell_size,
                window_size: self.window_size,
            });
        }
        if self.density_divisor == 0 {
            return Err(ConfigError::ZeroDensityDivisor);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }

    /// Cells per side. The board is square, so this is both width and height.
    pub fn columns(&self) -> usize {
        (self.window_size / self.cell_size.max(1)) as usize
    }

    pub fn rows(&self) -> usize {
        self.columns()
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

impl TryFrom<Args> for LifeConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let config = Self {
            cell_size: args.cell_size,
            window_size: args.window_size,
            frame_interval: Duration::from_millis(args.frame_interval_ms),
            density_divisor: args.density_divisor,
            seed: args.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Result<LifeConfig, ConfigError> {
        let args = Args::parse_from(std::iter::once("torus-life").chain(flags.iter().copied()));
        LifeConfig::try_from(args)
    }

    #[test]
    fn test_defaults_match_flags() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, LifeConfig::default());
        assert_eq!(config.columns(), 160);
        assert_eq!(config.rows(), 160);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--cell-size",
            "10",
            "--window-size",
            "300",
            "--frame-interval-ms",
            "100",
            "--density-divisor",
            "20",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(config.columns(), 30);
        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert_eq!(config.density_divisor, 20);
        assert_eq!(config.resolve_seed(), 42);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(parse(&["--cell-size", "0"]), Err(ConfigError::ZeroCellSize));
        assert_eq!(
            parse(&["--window-size", "0"]),
            Err(ConfigError::ZeroWindowSize)
        );
        assert_eq!(
            parse(&["--cell-size", "50", "--window-size", "40"]),
            Err(ConfigError::CellLargerThanWindow {
                cell_size: 50,
                window_size: 40
            })
        );
        assert_eq!(
            parse(&["--density-divisor", "0"]),
            Err(ConfigError::ZeroDensityDivisor)
        );
        assert_eq!(
            parse(&["--frame-interval-ms", "0"]),
            Err(ConfigError::ZeroFrameInterval)
        );
    }
}
// --- End of File: config.rs ---
