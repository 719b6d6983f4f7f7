//! Dice and character generation for Funnel.
//!
//! Provides an injectable dice engine, the weapon classification used for
//! damage and range, and the generator that turns a set of rule tables into
//! a fully resolved zero-level character.

pub mod config;
pub mod dice;
pub mod error;
pub mod generator;
pub mod weapon;

pub use config::GeneratorConfig;
pub use dice::{DiceSource, Die, MaxDice, RngDice, ScriptedDice};
pub use error::{GenError, GenResult, RetryStep};
pub use generator::{Generator, generate};
pub use weapon::WeaponClass;
