//! The character generation engine.
//!
//! [`Generator`] resolves a zero-level character in one fixed pass:
//!
//! 1. roll six abilities on 3d6 and look up their modifiers
//! 2. reroll while the suitability gate is on and the modifiers sum below zero
//! 3. lucky sign (d30) and saving throws
//! 4. race (d10, rerolling excluded races) and racial traits
//! 5. occupation, trained weapon and trade good, with their follow-up rolls
//! 6. languages
//! 7. starting coin, weapon damage and range, equipment
//! 8. speed, initiative, hit points, armor class
//!
//! Every roll goes through the caller's [`DiceSource`], so a scripted source
//! makes the whole pass reproducible. The two reroll loops are capped by
//! [`GeneratorConfig`] and report [`GenError::ExhaustedRetry`] when they give up.

pub mod abilities;
pub mod derived;
pub mod languages;
pub mod occupation;

use funnel_core::{Character, InvariantViolation, RuleTables};

use crate::config::GeneratorConfig;
use crate::dice::DiceSource;
use crate::error::{GenError, GenResult};
use crate::weapon::WeaponClass;

/// The list entry for `roll`, where a roll of `base` selects the first entry.
pub(crate) fn entry<'a, T>(list: &'a [T], roll: u32, base: u32, table: &str) -> GenResult<&'a T> {
    roll.checked_sub(base)
        .and_then(|i| list.get(i as usize))
        .ok_or_else(|| GenError::missing(table, roll))
}

/// Generates characters from a borrowed set of rule tables.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'t> {
    tables: &'t RuleTables,
    config: GeneratorConfig,
}

impl<'t> Generator<'t> {
    /// A generator over `tables` with the given configuration.
    pub fn new(tables: &'t RuleTables, config: GeneratorConfig) -> Self {
        Self { tables, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one character.
    pub fn generate(&self, dice: &mut dyn DiceSource) -> GenResult<Character> {
        let tables = self.tables;
        let config = &self.config;

        let abilities = abilities::roll_gated(tables, config, dice)?;
        let suitable = abilities.modifier_sum() >= 0;
        let lucky_sign = abilities::lucky_sign(tables, dice)?;
        let saving_throws = abilities::saving_throws(&abilities, &lucky_sign);

        let exclusions = config.exclusions.effective();
        let race = occupation::select_race(exclusions, config.max_race_attempts, dice)?;
        let racial_traits = race.traits().iter().map(|t| t.to_string()).collect();

        let occupation::Occupation {
            occupation,
            trained_weapon,
            trade_goods,
        } = occupation::resolve_occupation(tables, race, dice)?;

        let languages = languages::resolve_languages(
            tables,
            &abilities,
            &lucky_sign,
            race,
            config.max_language_attempts,
            dice,
        )?;

        let money = derived::starting_funds(&occupation, dice)?;
        let class = WeaponClass::classify(&trained_weapon);
        let equipment = derived::equipment(tables, &trained_weapon, class, &trade_goods, dice)?;
        let speed = derived::speed(race, &abilities, &lucky_sign);
        let initiative = derived::initiative(&abilities, &lucky_sign);
        let hit_points = derived::hit_points(&abilities, &lucky_sign, dice)?;
        let armor_class = derived::armor_class(&abilities, &lucky_sign, &trade_goods);

        let (wizard_spells_known, max_spell_level) = abilities::spell_hints(tables, &abilities)?;

        let character = Character {
            abilities,
            suitable,
            lucky_sign,
            saving_throws,
            race,
            racial_traits,
            occupation,
            trained_weapon,
            trade_goods,
            languages,
            money,
            trained_weapon_damage: class.damage().to_string(),
            trained_weapon_range: class.range().to_string(),
            equipment,
            speed,
            initiative,
            hit_points,
            armor_class,
            wizard_spells_known,
            max_spell_level,
        };

        character.validate()?;
        if exclusions.excludes(character.race) {
            return Err(InvariantViolation(format!("race {} is excluded", character.race)).into());
        }
        log::debug!(
            "generated {} {} with {} hp",
            character.race,
            character.occupation,
            character.hit_points
        );
        Ok(character)
    }

    /// Generate `count` characters from the same dice.
    ///
    /// Each character succeeds or fails on its own; a failure does not stop
    /// the characters after it.
    pub fn generate_many(
        &self,
        count: usize,
        dice: &mut dyn DiceSource,
    ) -> Vec<GenResult<Character>> {
        (0..count)
            .map(|index| {
                self.generate(dice).inspect_err(|e| {
                    log::warn!("character {} failed: {e}", index + 1);
                })
            })
            .collect()
    }
}

/// Generate one character from `tables` with `config`.
pub fn generate(
    tables: &RuleTables,
    config: GeneratorConfig,
    dice: &mut dyn DiceSource,
) -> GenResult<Character> {
    Generator::new(tables, config).generate(dice)
}
