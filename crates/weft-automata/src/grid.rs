#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::{Automaton, ConfigError, StepOutcome};

/// Conway's Game of Life (B3/S23) on a toroidal square grid.
///
/// Cells live in a flat buffer of length `side * side`; index `i` maps to
/// coordinates `(i % side, i / side)`. Neighbor lookups wrap at the edges in
/// both axes, so the grid has no boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridAutomaton {
    /// Cell states (true = alive), row-major.
    cells: Vec<bool>,
    /// Side length of the square grid.
    side: usize,
    /// Completed generations since the last reset.
    generation: u64,
}

impl GridAutomaton {
    /// Creates an empty grid.
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::ZeroSide);
        }
        Ok(Self {
            cells: vec![false; side * side],
            side,
            generation: 0,
        })
    }

    /// Creates a grid randomized with the given live-cell density.
    pub fn with_density<R: Rng>(side: usize, density: f64, rng: &mut R) -> Result<Self, ConfigError> {
        let mut grid = Self::new(side)?;
        grid.randomize(rng, density);
        Ok(grid)
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of completed generations since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the flat cell buffer, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Counts total alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Gets the state of a cell. Out-of-bounds reads are dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.side && y < self.side {
            self.cells[y * self.side + x]
        } else {
            false
        }
    }

    /// Sets the state of a cell. Out-of-bounds writes are a no-op.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.side && y < self.side {
            self.cells[y * self.side + x] = alive;
        }
    }

    /// Flips a single cell in place. Out-of-bounds is a no-op.
    ///
    /// Does not touch the generation counter; toggling is an edit of the
    /// current snapshot, not a step.
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.side && y < self.side {
            let i = y * self.side + x;
            self.cells[i] = !self.cells[i];
        }
    }

    /// Kills every cell and resets the generation counter.
    ///
    /// Keeps the existing allocation and side length.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Randomizes the grid: each cell is independently alive with
    /// probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`. Resets the generation counter.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
        self.generation = 0;
    }

    /// Counts alive toroidal Moore neighbors of `(x, y)`.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let side = self.side as isize;
        let mut count = 0u8;

        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as isize + dx).rem_euclid(side) as usize;
                let ny = (y as isize + dy).rem_euclid(side) as usize;
                if self.cells[ny * self.side + nx] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advances the grid by one generation.
    ///
    /// The next state is computed entirely from the current snapshot; no
    /// cell ever sees a partially-updated neighborhood. The grid automaton
    /// has no terminal condition, so this always returns
    /// [`StepOutcome::Advanced`].
    pub fn step(&mut self) -> StepOutcome {
        let mut next = vec![false; self.cells.len()];

        for y in 0..self.side {
            for x in 0..self.side {
                let neighbors = self.live_neighbors(x, y);
                let alive = self.cells[y * self.side + x];

                next[y * self.side + x] = match (alive, neighbors) {
                    (true, 2 | 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
            }
        }

        self.cells = next;
        self.generation += 1;
        StepOutcome::Advanced
    }
}

impl Automaton for GridAutomaton {
    fn step(&mut self) -> StepOutcome {
        GridAutomaton::step(self)
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
