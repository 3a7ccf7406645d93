#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lookup table for a Wolfram elementary rule.
///
/// A rule number's eight binary digits define the output bit for each of the
/// eight possible three-cell neighborhoods: bit 7 answers neighborhood
/// `111`, bit 0 answers `000`. The table is a derived value; it is rebuilt
/// whenever the rule number changes and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleTable {
    rule: u8,
    outputs: [bool; 8],
}

impl RuleTable {
    /// Builds the table for the given rule number.
    pub fn new(rule: u8) -> Self {
        let mut outputs = [false; 8];
        for (i, out) in outputs.iter_mut().enumerate() {
            *out = (rule >> i) & 1 == 1;
        }
        Self { rule, outputs }
    }

    /// Returns the rule number this table was built from.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Looks up the output bit for a `(left, center, right)` neighborhood.
    #[inline]
    pub fn output(&self, left: bool, center: bool, right: bool) -> bool {
        let index = (left as u8) << 2 | (center as u8) << 1 | right as u8;
        self.outputs[index as usize]
    }

    /// Returns the raw output bits, indexed by neighborhood value 0-7.
    pub fn outputs(&self) -> [bool; 8] {
        self.outputs
    }
}

/// Well-known elementary rules.
pub mod rules {
    /// Rule 30 - chaotic, used for random number generation.
    pub const RULE_30: u8 = 30;

    /// Rule 90 - Sierpinski triangle.
    pub const RULE_90: u8 = 90;

    /// Rule 110 - Turing complete.
    pub const RULE_110: u8 = 110;

    /// Rule 184 - traffic flow model.
    pub const RULE_184: u8 = 184;

    /// Rule 250 - simple growth.
    pub const RULE_250: u8 = 250;
}
