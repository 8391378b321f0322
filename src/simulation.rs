// --- File: simulation.rs ---
use crate::config::LifeConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SimRng = StdRng;

/// Double-buffered Game of Life state.
///
/// `grids[current]` is the generation exposed for rendering; the other slot is
/// the write target for the next [`Simulation::advance`].
#[derive(Debug, Clone)]
pub struct Simulation {
    grids: [Grid; 2],
    current: usize,
    width: usize,
    height: usize,
    generation: u64,
}

impl Simulation {
    /// Creates a `width x height` board and sets `width * height / density_divisor`
    /// random cells alive.
    ///
    /// Picks may repeat, in which case the same cell is simply set again, so the
    /// number of distinct live cells can come out lower than the pick count.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density_divisor: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if density_divisor == 0 {
            return Err(ConfigError::ZeroDensityDivisor);
        }
        let mut seeded = Grid::new(width, height)?;
        for _ in 0..(width * height / density_divisor) {
            let x = rng.gen_range(0..width) as isize;
            let y = rng.gen_range(0..height) as isize;
            seeded.set_alive(x, y, true);
        }
        Ok(Self::from_grid(seeded))
    }

    /// Same as [`Simulation::new`] with a `StdRng` built from `seed`, so the
    /// initial population is reproducible.
    pub fn with_seed(
        width: usize,
        height: usize,
        density_divisor: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = SimRng::seed_from_u64(seed);
        Self::new(width, height, density_divisor, &mut rng)
    }

    /// Builds the square board described by `config`, seeded with `seed`.
    pub fn from_config(config: &LifeConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_seed(config.columns(), config.rows(), config.density_divisor, seed)
    }

    /// Wraps a hand-placed pattern as generation zero.
    pub fn from_grid(grid: Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut back = grid.clone();
        back.clear();
        Self {
            grids: [grid, back],
            current: 0,
            width,
            height,
            generation: 0,
        }
    }

    /// Advances one generation.
    ///
    /// Every cell of the back buffer is recomputed from the current grid, then
    /// the buffers swap roles. The current grid is never written during the sweep.
    pub fn advance(&mut self) {
        let [first, second] = &mut self.grids;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                next.set_alive(x, y, current.next_state(x, y));
            }
        }
        self.current = 1 - self.current;
        self.generation += 1;
        log::trace!(
            "generation {} has {} live cells",
            self.generation,
            self.current().live_count()
        );
    }

    /// The generation to render.
    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed `advance` calls.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// --- End of File: simulation.rs ---
