//! Configuration for character generation.

use funnel_core::RaceExclusions;
use serde::{Deserialize, Serialize};

/// Configuration for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Reroll abilities until the modifiers sum to zero or more.
    pub test_suitability: bool,
    /// Races the caller does not want.
    pub exclusions: RaceExclusions,
    /// Attempts allowed for the suitability reroll loop.
    pub max_suitability_attempts: u32,
    /// Attempts allowed for the race reroll loop.
    pub max_race_attempts: u32,
    /// Attempts allowed per bonus language.
    pub max_language_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            test_suitability: true,
            exclusions: RaceExclusions::none(),
            max_suitability_attempts: 10_000,
            max_race_attempts: 1_000,
            max_language_attempts: 1_000,
        }
    }
}

impl GeneratorConfig {
    /// Enable or disable the suitability gate.
    pub fn with_suitability(mut self, test: bool) -> Self {
        self.test_suitability = test;
        self
    }

    /// Set the race exclusions.
    pub fn with_exclusions(mut self, exclusions: RaceExclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Set the suitability attempt cap (at least 1).
    pub fn with_max_suitability_attempts(mut self, attempts: u32) -> Self {
        self.max_suitability_attempts = attempts.max(1);
        self
    }

    /// Set the race attempt cap (at least 1).
    pub fn with_max_race_attempts(mut self, attempts: u32) -> Self {
        self.max_race_attempts = attempts.max(1);
        self
    }

    /// Set the per-language attempt cap (at least 1).
    pub fn with_max_language_attempts(mut self, attempts: u32) -> Self {
        self.max_language_attempts = attempts.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GeneratorConfig::default();
        assert!(cfg.test_suitability);
        assert_eq!(cfg.exclusions, RaceExclusions::none());
        assert_eq!(cfg.max_suitability_attempts, 10_000);
        assert_eq!(cfg.max_race_attempts, 1_000);
        assert_eq!(cfg.max_language_attempts, 1_000);
    }

    #[test]
    fn builder_chain() {
        let exclusions = RaceExclusions {
            elf: true,
            ..RaceExclusions::none()
        };
        let cfg = GeneratorConfig::default()
            .with_suitability(false)
            .with_exclusions(exclusions)
            .with_max_race_attempts(7);
        assert!(!cfg.test_suitability);
        assert!(cfg.exclusions.elf);
        assert_eq!(cfg.max_race_attempts, 7);
    }

    #[test]
    fn attempt_caps_clamped() {
        let cfg = GeneratorConfig::default()
            .with_max_suitability_attempts(0)
            .with_max_language_attempts(0);
        assert_eq!(cfg.max_suitability_attempts, 1);
        assert_eq!(cfg.max_language_attempts, 1);
    }
}
