//! Cellular automata simulation core.
//!
//! Implements the two simulators behind the interactive automata surface:
//! a toroidal 2D Game of Life grid and a 1D Wolfram elementary automaton
//! with an append-only row history. Both share the [`Automaton`] stepping
//! contract so a single player can drive either one.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use weft_automata::{Automaton, GridAutomaton, RowAutomaton, SeedPattern, StepOutcome};
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//!
//! // 2D: Game of Life at 30% density
//! let mut grid = GridAutomaton::with_density(50, 0.3, &mut rng).unwrap();
//! grid.step();
//! assert_eq!(grid.generation(), 1);
//!
//! // 1D: Rule 30 from a single center cell
//! let mut rows = RowAutomaton::new(100, 60, 30).unwrap();
//! rows.reseed(SeedPattern::Center, &mut rng);
//! assert_eq!(rows.step(), StepOutcome::Advanced);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

mod grid;
mod row;
mod rule;

pub use grid::*;
pub use row::*;
pub use rule::*;

/// Result of advancing an automaton by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepOutcome {
    /// A new generation was produced.
    Advanced,
    /// The automaton cannot advance further. This is a normal terminal
    /// condition, not an error; callers driving a timed loop should stop.
    Exhausted,
}

impl StepOutcome {
    /// Returns true for [`StepOutcome::Exhausted`].
    pub fn is_exhausted(self) -> bool {
        matches!(self, StepOutcome::Exhausted)
    }
}

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid side length must be nonzero")]
    ZeroSide,

    #[error("row width must be nonzero")]
    ZeroWidth,

    #[error("row capacity must be nonzero")]
    ZeroCapacity,
}

/// Shared stepping contract for the simulators.
///
/// Steps are synchronous and snapshot-to-snapshot: a step reads only the
/// state that existed when it started and always runs to completion.
pub trait Automaton {
    /// Advances by one generation, or reports exhaustion.
    fn step(&mut self) -> StepOutcome;

    /// Returns the number of completed generations since the last reset.
    fn generation(&self) -> u64;
}
