#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::{Automaton, ConfigError, RuleTable, StepOutcome};

/// First-row seed for a [`RowAutomaton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedPattern {
    /// All dead except a single live cell at `cols / 2`.
    #[default]
    Center,
    /// Each cell independently alive with probability one half.
    Random,
    /// Every cell alive.
    All,
    /// Cell `i` alive iff `i` is odd.
    Alternating,
}

impl SeedPattern {
    /// Builds a first row of the given width.
    ///
    /// The RNG is consulted only by [`SeedPattern::Random`].
    pub fn first_row<R: Rng>(self, cols: usize, rng: &mut R) -> Vec<bool> {
        match self {
            SeedPattern::Center => {
                let mut row = vec![false; cols];
                row[cols / 2] = true;
                row
            }
            SeedPattern::Random => (0..cols).map(|_| rng.random_bool(0.5)).collect(),
            SeedPattern::All => vec![true; cols],
            SeedPattern::Alternating => (0..cols).map(|i| i % 2 == 1).collect(),
        }
    }
}

/// 1D elementary cellular automaton with an append-only row history.
///
/// Each step derives a new row from the latest one via a [`RuleTable`],
/// looking neighbors up on a circular ring (the row wraps at both ends).
/// Rows are never mutated once appended, so the generation count is simply
/// the number of appended rows. Once `max_rows` rows exist the automaton is
/// exhausted and further steps report [`StepOutcome::Exhausted`] without
/// appending.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowAutomaton {
    /// Appended rows, oldest first. Never empty.
    rows: Vec<Vec<bool>>,
    /// Fixed row width.
    cols: usize,
    /// Row capacity; stepping stops once reached.
    max_rows: usize,
    /// Seed used for the current history's first row.
    pattern: SeedPattern,
    /// Derived rule lookup table.
    table: RuleTable,
}

impl RowAutomaton {
    /// Creates a row automaton seeded with a single [`SeedPattern::Center`]
    /// row.
    pub fn new(cols: usize, max_rows: usize, rule: u8) -> Result<Self, ConfigError> {
        if cols == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if max_rows == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let mut first = vec![false; cols];
        first[cols / 2] = true;
        Ok(Self {
            rows: vec![first],
            cols,
            max_rows,
            pattern: SeedPattern::Center,
            table: RuleTable::new(rule),
        })
    }

    /// Returns the fixed row width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row capacity.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Returns the active rule number.
    pub fn rule(&self) -> u8 {
        self.table.rule()
    }

    /// Returns the derived rule table.
    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the seed pattern of the current history.
    pub fn pattern(&self) -> SeedPattern {
        self.pattern
    }

    /// Returns all rows, oldest first.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Returns the most recently appended row.
    pub fn latest(&self) -> &[bool] {
        &self.rows[self.rows.len() - 1]
    }

    /// Returns the number of appended rows (the first row is generation 0).
    pub fn generation(&self) -> u64 {
        (self.rows.len() - 1) as u64
    }

    /// Returns true once the history has reached `max_rows`.
    pub fn is_exhausted(&self) -> bool {
        self.rows.len() >= self.max_rows
    }

    /// Changes the active rule.
    ///
    /// Rebuilds the lookup table but keeps the existing history; a rule
    /// change is not a sizing change, so subsequent rows simply follow the
    /// new rule.
    pub fn set_rule(&mut self, rule: u8) {
        self.table = RuleTable::new(rule);
    }

    /// Replaces the history with a single fresh first row.
    pub fn reseed<R: Rng>(&mut self, pattern: SeedPattern, rng: &mut R) {
        self.pattern = pattern;
        self.rows = vec![pattern.first_row(self.cols, rng)];
    }

    /// Resizes the automaton and re-seeds it with the stored pattern.
    ///
    /// Sizing changes always discard the history.
    pub fn resize<R: Rng>(
        &mut self,
        cols: usize,
        max_rows: usize,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        if cols == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if max_rows == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.cols = cols;
        self.max_rows = max_rows;
        self.rows = vec![self.pattern.first_row(cols, rng)];
        Ok(())
    }

    /// Derives and appends the next row.
    ///
    /// At capacity this is a no-op reporting [`StepOutcome::Exhausted`];
    /// the caller (typically a player) is expected to stop driving steps.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_exhausted() {
            return StepOutcome::Exhausted;
        }

        let current = &self.rows[self.rows.len() - 1];
        let cols = self.cols;
        let mut next = vec![false; cols];

        for (i, cell) in next.iter_mut().enumerate() {
            let left = current[(i + cols - 1) % cols];
            let center = current[i];
            let right = current[(i + 1) % cols];
            *cell = self.table.output(left, center, right);
        }

        self.rows.push(next);
        StepOutcome::Advanced
    }
}

impl Automaton for RowAutomaton {
    fn step(&mut self) -> StepOutcome {
        RowAutomaton::step(self)
    }

    fn generation(&self) -> u64 {
        RowAutomaton::generation(self)
    }
}
