//! Error types for the generation engine.

use funnel_core::{InvariantViolation, TableError};

/// A reroll loop that can give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    /// Rerolling abilities until the modifiers sum to zero or more.
    Suitability,
    /// Rerolling race until a non-excluded race comes up.
    Race,
    /// Rerolling a bonus language until an unknown one comes up.
    Language,
}

impl std::fmt::Display for RetryStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suitability => write!(f, "suitability reroll"),
            Self::Race => write!(f, "race reroll"),
            Self::Language => write!(f, "language reroll"),
        }
    }
}

/// Errors that can occur while generating a character.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A table has no entry for a roll the rules allow.
    #[error("table '{table}' has no entry for {key}")]
    Configuration {
        /// The table that was consulted.
        table: String,
        /// The key or roll that missed.
        key: String,
    },

    /// A reroll loop hit its attempt cap.
    #[error("{step} gave up after {attempts} attempts")]
    ExhaustedRetry {
        /// Which loop gave up.
        step: RetryStep,
        /// How many attempts were made.
        attempts: u32,
    },

    /// The caller asked for something nonsensical (e.g. a zero-sided die).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The finished record broke an invariant.
    #[error(transparent)]
    InvalidCharacter(#[from] InvariantViolation),

    /// The rule tables could not be loaded or are malformed.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl GenError {
    /// Shorthand for building a [`GenError::Configuration`].
    pub fn missing(table: &str, key: impl std::fmt::Display) -> Self {
        Self::Configuration {
            table: table.to_string(),
            key: key.to_string(),
        }
    }
}

/// Convenience result type for generation.
pub type GenResult<T> = Result<T, GenError>;
