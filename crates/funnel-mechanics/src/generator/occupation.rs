//! Race selection and occupation resolution.

use funnel_core::tables::{ANIMAL_TYPE_FILE, CART_CONTENTS_FILE, FARMER_TYPE_FILE};
use funnel_core::{Race, RaceExclusions, RuleTables};

use super::entry;
use crate::dice::{DiceSource, Die};
use crate::error::{GenError, GenResult, RetryStep};
use crate::weapon::WeaponClass;

/// Occupations whose trade good may be swapped for an animal.
const HERDING: [&str; 3] = ["Dwarven herder", "Herder", "Farmer"];

/// Roll a race on a d10, rerolling excluded races.
///
/// `exclusions` must already be the effective set; if it excluded every
/// race this would only ever exhaust.
pub fn select_race(
    exclusions: RaceExclusions,
    max_attempts: u32,
    dice: &mut dyn DiceSource,
) -> GenResult<Race> {
    for attempt in 1..=max_attempts {
        let race = Race::from_roll(dice.roll(Die::D10, 1)?);
        if !exclusions.excludes(race) {
            log::debug!("race {race} on attempt {attempt}");
            return Ok(race);
        }
        log::trace!("race {race} excluded, rerolling");
    }

    log::warn!("no allowed race after {max_attempts} attempts");
    Err(GenError::ExhaustedRetry {
        step: RetryStep::Race,
        attempts: max_attempts,
    })
}

/// Occupation, weapon, and trade good after every follow-up roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupation {
    /// Occupation label.
    pub occupation: String,
    /// Trained weapon, with ammunition for missile weapons.
    pub trained_weapon: String,
    /// Trade good; may be empty.
    pub trade_goods: String,
}

/// Roll on the race's occupation table and apply the follow-up rolls.
pub fn resolve_occupation(
    tables: &RuleTables,
    race: Race,
    dice: &mut dyn DiceSource,
) -> GenResult<Occupation> {
    let roll = dice.roll(Die::from_sides(race.occupation_range()), 1)?;
    let row = tables
        .occupations(race)
        .lookup(roll)
        .ok_or_else(|| GenError::missing(race.occupation_file(), roll))?;

    let mut occupation = row.occupation.clone();
    let mut trained_weapon = row.trained_weapon.clone();
    let mut trade_goods = row.trade_goods.clone();

    if WeaponClass::uses_ammo(&trained_weapon) {
        let ammo = dice.roll(Die::D6, 1)?;
        trained_weapon = format!("{trained_weapon} + {ammo} ammo");
    }

    if HERDING.contains(&occupation.as_str()) {
        let roll = dice.roll(Die::D20, 1)?;
        if roll > 14 {
            trade_goods = entry(&tables.animal_types, roll, 14, ANIMAL_TYPE_FILE)?.clone();
        }
    }

    if occupation == "Farmer" {
        let roll = dice.roll(Die::D8, 1)?;
        let crop = entry(&tables.farmer_types, roll, 1, FARMER_TYPE_FILE)?;
        occupation = format!("{crop} farmer");
    }

    if occupation == "Wainwright" {
        let roll = dice.roll(Die::D6, 1)?;
        let load = entry(&tables.cart_contents, roll, 1, CART_CONTENTS_FILE)?;
        trade_goods = format!("Pushcart full of {load}");
    }

    log::debug!("occupation {occupation} ({trained_weapon}; {trade_goods})");
    Ok(Occupation {
        occupation,
        trained_weapon,
        trade_goods,
    })
}
