//! Dice types and the randomness primitive.
//!
//! Every roll the generator makes goes through [`DiceSource::roll`]: the sum
//! of `count` independent draws of one die. Sources are injectable so tests
//! can fix the outcome of every roll.

pub mod source;

pub use source::{MaxDice, RngDice, ScriptedDice};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Twenty-four-sided die.
    D24,
    /// Thirty-sided die.
    D30,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D30 => 30,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The die with `sides` faces, using a named variant where one exists.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            24 => Self::D24,
            30 => Self::D30,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A source of die results.
pub trait DiceSource {
    /// One draw from `1..=sides`. Callers guarantee `sides >= 1`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Sum of `count` independent draws of `die`.
    ///
    /// Rejects a zero-sided die, a zero count, and a total too large to hold.
    fn roll(&mut self, die: Die, count: u32) -> GenResult<u32> {
        let sides = die.sides();
        if sides == 0 {
            return Err(GenError::InvalidRequest(
                "a die needs at least one side".to_string(),
            ));
        }
        if count == 0 {
            return Err(GenError::InvalidRequest(format!(
                "cannot roll zero {die}"
            )));
        }
        let total = (0..count)
            .try_fold(0u32, |total, _| total.checked_add(self.roll_die(sides)))
            .ok_or_else(|| {
                GenError::InvalidRequest(format!("{count}{die} overflows the dice total"))
            })?;
        log::trace!("rolled {count}{die} = {total}");
        Ok(total)
    }
}
