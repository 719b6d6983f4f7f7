//! Core types for Funnel: rule tables, races, and the character record.
//!
//! This crate holds the data the generator works with. It parses the
//! published rule tables from flat files (or the copies embedded in the
//! crate), validates that every legal roll lands on an entry, and defines
//! the [`Character`] record the generator produces. It does no rolling
//! itself.

/// The zero-level character record.
pub mod character;
/// Error types for table loading.
pub mod error;
/// Races, racial traits, and race exclusions.
pub mod race;
/// The rule table store and its flat-file formats.
pub mod tables;

/// Re-export character record types.
pub use character::{
    Abilities, Ability, AbilityScore, Character, InvariantViolation, Money, SavingThrows,
};
/// Re-export error types.
pub use error::{TableError, TableResult};
/// Re-export race types.
pub use race::{Race, RaceExclusions};
/// Re-export the table store.
pub use tables::{LuckEffect, LuckySign, RuleTables};
