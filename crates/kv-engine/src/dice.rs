//! The two six-sided dice thrown each turn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Number of faces on each die.
pub const DIE_SIDES: u32 = 6;

/// The faces shown by one throw of both dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First die (1-6).
    pub first: u32,
    /// Second die (1-6).
    pub second: u32,
}

impl DiceRoll {
    /// Throw both dice.
    pub fn throw(rng: &mut dyn RandomSource) -> Self {
        let first = rng.below(DIE_SIDES) + 1;
        let second = rng.below(DIE_SIDES) + 1;
        Self { first, second }
    }

    /// Sum of both faces (2-12).
    pub fn total(&self) -> u32 {
        self.first + self.second
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.first, self.second, self.total())
    }
}
