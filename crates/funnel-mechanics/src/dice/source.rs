//! Concrete dice sources: seeded RNG, scripted results, and maximum faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DiceSource;

/// Dice backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RngDice<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Dice from a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}

/// Dice that replay a fixed list of results.
///
/// Each draw takes the next value, clamped to the die's faces. When the
/// list runs out it starts again from the beginning.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u32>,
    next: usize,
    drawn: usize,
}

impl ScriptedDice {
    /// Replay `values` in order. An empty list behaves like all ones.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
            drawn: 0,
        }
    }

    /// Number of individual dice drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.drawn += 1;
        let Some(value) = self.values.get(self.next).copied() else {
            return 1;
        };
        self.next = (self.next + 1) % self.values.len();
        value.clamp(1, sides)
    }
}

/// Dice that always land on their highest face.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxDice;

impl DiceSource for MaxDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        sides
    }
}
