//! Ability scores, the suitability gate, the lucky sign, and saving throws.

use funnel_core::tables::ability;
use funnel_core::tables::luck;
use funnel_core::{Abilities, AbilityScore, LuckEffect, LuckySign, RuleTables, SavingThrows};

use super::entry;
use crate::config::GeneratorConfig;
use crate::dice::{DiceSource, Die};
use crate::error::{GenError, GenResult, RetryStep};

fn roll_score(tables: &RuleTables, dice: &mut dyn DiceSource) -> GenResult<AbilityScore> {
    let score = dice.roll(Die::D6, 3)?;
    let modifier = tables
        .ability_modifiers
        .modifier(score)
        .ok_or_else(|| GenError::missing(ability::FILE, score))?;
    Ok(AbilityScore { score, modifier })
}

/// Roll all six abilities once, in sheet order.
pub fn roll_abilities(tables: &RuleTables, dice: &mut dyn DiceSource) -> GenResult<Abilities> {
    Ok(Abilities {
        strength: roll_score(tables, dice)?,
        agility: roll_score(tables, dice)?,
        stamina: roll_score(tables, dice)?,
        intelligence: roll_score(tables, dice)?,
        personality: roll_score(tables, dice)?,
        luck: roll_score(tables, dice)?,
    })
}

/// Roll abilities, rerolling while the suitability gate is on and the
/// modifiers sum below zero.
pub fn roll_gated(
    tables: &RuleTables,
    config: &GeneratorConfig,
    dice: &mut dyn DiceSource,
) -> GenResult<Abilities> {
    if !config.test_suitability {
        return roll_abilities(tables, dice);
    }

    let attempts = config.max_suitability_attempts;
    for attempt in 1..=attempts {
        let abilities = roll_abilities(tables, dice)?;
        let sum = abilities.modifier_sum();
        if sum >= 0 {
            log::debug!("abilities accepted on attempt {attempt} (modifier sum {sum})");
            return Ok(abilities);
        }
        log::trace!("abilities rejected on attempt {attempt} (modifier sum {sum})");
    }

    log::warn!("no suitable abilities after {attempts} attempts");
    Err(GenError::ExhaustedRetry {
        step: RetryStep::Suitability,
        attempts,
    })
}

/// Pick the lucky sign with a d30.
pub fn lucky_sign(tables: &RuleTables, dice: &mut dyn DiceSource) -> GenResult<LuckySign> {
    let roll = dice.roll(Die::D30, 1)?;
    let sign = entry(&tables.lucky_signs, roll, 1, luck::FILE)?.clone();
    log::debug!("lucky sign: {sign}");
    Ok(sign)
}

/// Wizard spells known and max spell level for the character's intelligence.
pub fn spell_hints(tables: &RuleTables, abilities: &Abilities) -> GenResult<(String, String)> {
    let score = abilities.intelligence.score;
    let row = tables
        .ability_modifiers
        .get(score)
        .ok_or_else(|| GenError::missing(ability::FILE, score))?;
    Ok((row.wizard_spells_known.clone(), row.max_spell_level.clone()))
}

/// Saving throws from agility, stamina and personality, plus any lucky-sign bonus.
pub fn saving_throws(abilities: &Abilities, sign: &LuckySign) -> SavingThrows {
    let luck = abilities.luck.modifier;
    let all = sign.bonus(LuckEffect::AllSavingThrows, luck);
    SavingThrows {
        reflex: abilities.agility.modifier + all + sign.bonus(LuckEffect::ReflexSave, luck),
        fortitude: abilities.stamina.modifier + all + sign.bonus(LuckEffect::FortitudeSave, luck),
        willpower: abilities.personality.modifier
            + all
            + sign.bonus(LuckEffect::WillpowerSave, luck),
    }
}
