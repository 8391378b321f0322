// --- File: grid.rs ---
// Toroidal cell field and the B3/S23 next-state rule. Every lookup wraps both
// axes: the left edge neighbors the right edge, the top row the bottom row.

use crate::error::ConfigError;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A `width x height` field of cells where `true` means alive.
///
/// Cells are stored row-major: row `y` occupies `cells[y * width..(y + 1) * width]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && isize::try_from(len).is_ok())
            .ok_or(ConfigError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether the cell at `(x, y)` is alive.
    ///
    /// Any integer coordinate is accepted; both axes wrap, so
    /// `is_alive(x + k * width, y + k * height) == is_alive(x, y)` for every `k`.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Sets the state of the cell at `(x, y)`.
    ///
    /// Coordinates wrap the same way as [`Grid::is_alive`], so an out-of-range
    /// position lands on its toroidal image instead of a foreign row.
    pub fn set_alive(&mut self, x: isize, y: isize, state: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// Number of live cells among the eight toroidal neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> usize {
        // Wrap first so the offsets below cannot overflow at the isize limits.
        let (x, y) = self.wrap(x, y);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count()
    }

    /// State of `(x, y)` in the following generation.
    ///
    /// Exactly three live neighbors: alive. Exactly two: unchanged.
    /// Anything else: dead.
    pub fn next_state(&self, x: isize, y: isize) -> bool {
        match self.live_neighbors(x, y) {
            3 => true,
            2 => self.is_alive(x, y),
            _ => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn wrap(&self, x: isize, y: isize) -> (isize, isize) {
        (
            x.rem_euclid(self.width as isize),
            y.rem_euclid(self.height as isize),
        )
    }

    fn index(&self, x: isize, y: isize) -> usize {
        let (x, y) = self.wrap(x, y);
        y as usize * self.width + x as usize
    }
}

// --- End of File: grid.rs ---
