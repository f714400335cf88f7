//! Uniform random sources.
//!
//! Every random decision in the engine (dice faces, chance cards) goes
//! through [`RandomSource`], so a seeded `StdRng` drives normal play and a
//! [`ScriptedRandom`] makes a game fully deterministic.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a uniform integer in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: u32) -> u32;
}

impl RandomSource for StdRng {
    fn below(&mut self, upper: u32) -> u32 {
        self.random_range(0..upper)
    }
}

/// A fixed sequence of values, replayed in order and cycled when exhausted.
///
/// Each value is reduced modulo the requested bound, so `below(6)` on a
/// script of `[0, 1]` yields die faces 1 and 2.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a scripted source. An empty script always yields zero.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Script a sequence of die faces (1-6) for consecutive rolls.
    pub fn from_faces(faces: &[u32]) -> Self {
        Self::new(faces.iter().map(|f| f.saturating_sub(1)).collect::<Vec<_>>())
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if self.values.is_empty() || upper == 0 {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
