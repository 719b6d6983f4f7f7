//! Coin, equipment, and the stats derived from earlier steps.

use funnel_core::tables::EQUIPMENT_FILE;
use funnel_core::{Abilities, LuckEffect, LuckySign, Money, Race, RuleTables};

use super::entry;
use crate::dice::{DiceSource, Die};
use crate::error::GenResult;
use crate::weapon::WeaponClass;

/// 5d12 copper, plus the fixed purse of a few moneyed occupations.
pub fn starting_funds(occupation: &str, dice: &mut dyn DiceSource) -> GenResult<Money> {
    let mut money = Money {
        cp: dice.roll(Die::D12, 5)?,
        ..Money::default()
    };
    match occupation {
        "Halfling trader" => money.sp += 20,
        "Halfling moneylender" => {
            money.gp += 5;
            money.sp += 10;
            money.cp += 200;
        }
        "Merchant" => {
            money.gp += 4;
            money.sp += 14;
            money.cp += 27;
        }
        "Tax collector" => money.cp += 100,
        _ => {}
    }
    Ok(money)
}

/// Trained weapon line, trade good (if any), and one random bonus item.
pub fn equipment(
    tables: &RuleTables,
    weapon: &str,
    class: WeaponClass,
    trade_goods: &str,
    dice: &mut dyn DiceSource,
) -> GenResult<Vec<String>> {
    let mut items = vec![format!("{weapon} {} {}", class.damage(), class.range())];
    if !trade_goods.is_empty() {
        items.push(trade_goods.to_string());
    }
    let roll = dice.roll(Die::D24, 1)?;
    items.push(entry(&tables.equipment, roll, 1, EQUIPMENT_FILE)?.clone());
    Ok(items)
}

/// Movement in feet, e.g. `30'`.
pub fn speed(race: Race, abilities: &Abilities, sign: &LuckySign) -> String {
    let feet = race.base_speed() + 5 * sign.bonus(LuckEffect::Speed, abilities.luck.modifier);
    format!("{feet}'")
}

/// Agility modifier plus any lucky-sign bonus.
pub fn initiative(abilities: &Abilities, sign: &LuckySign) -> i32 {
    abilities.agility.modifier + sign.bonus(LuckEffect::Initiative, abilities.luck.modifier)
}

/// 1d4 plus stamina, never below one.
pub fn hit_points(
    abilities: &Abilities,
    sign: &LuckySign,
    dice: &mut dyn DiceSource,
) -> GenResult<i32> {
    let roll = dice.roll(Die::D4, 1)? as i32;
    let hp = roll
        + abilities.stamina.modifier
        + sign.bonus(LuckEffect::HitPoints, abilities.luck.modifier);
    Ok(hp.max(1))
}

/// 10 plus agility, armor carried as a trade good, and any lucky-sign bonus.
pub fn armor_class(abilities: &Abilities, sign: &LuckySign, trade_goods: &str) -> i32 {
    let armor = match trade_goods {
        "Leather armor" => 2,
        "Hide armor" => 3,
        "Shield" => 1,
        _ => 0,
    };
    10 + abilities.agility.modifier
        + armor
        + sign.bonus(LuckEffect::ArmorClass, abilities.luck.modifier)
}
