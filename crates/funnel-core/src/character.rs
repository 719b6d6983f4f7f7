//! The zero-level character record.
//!
//! A [`Character`] is produced in a single pass by the generator and is not
//! changed afterwards. It carries every value a character sheet needs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::race::Race;
use crate::tables::LuckySign;

/// One of the six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Strength.
    Strength,
    /// Agility.
    Agility,
    /// Stamina.
    Stamina,
    /// Intelligence.
    Intelligence,
    /// Personality.
    Personality,
    /// Luck.
    Luck,
}

impl Ability {
    /// All abilities in the order they are rolled.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Agility,
        Self::Stamina,
        Self::Intelligence,
        Self::Personality,
        Self::Luck,
    ];
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Agility => write!(f, "Agility"),
            Self::Stamina => write!(f, "Stamina"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Personality => write!(f, "Personality"),
            Self::Luck => write!(f, "Luck"),
        }
    }
}

/// A raw 3d6 score and its table modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// Raw score, 3-18.
    pub score: u32,
    /// Modifier looked up from the ability table.
    pub modifier: i32,
}

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    /// Strength.
    pub strength: AbilityScore,
    /// Agility.
    pub agility: AbilityScore,
    /// Stamina.
    pub stamina: AbilityScore,
    /// Intelligence.
    pub intelligence: AbilityScore,
    /// Personality.
    pub personality: AbilityScore,
    /// Luck.
    pub luck: AbilityScore,
}

impl Abilities {
    /// Score and modifier for one ability.
    pub fn get(&self, ability: Ability) -> AbilityScore {
        match ability {
            Ability::Strength => self.strength,
            Ability::Agility => self.agility,
            Ability::Stamina => self.stamina,
            Ability::Intelligence => self.intelligence,
            Ability::Personality => self.personality,
            Ability::Luck => self.luck,
        }
    }

    /// Sum of all six modifiers.
    pub fn modifier_sum(&self) -> i32 {
        Ability::ALL.iter().map(|a| self.get(*a).modifier).sum()
    }
}

/// Starting coin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Gold pieces.
    pub gp: u32,
    /// Silver pieces.
    pub sp: u32,
    /// Copper pieces.
    pub cp: u32,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gp, {} sp, {} cp", self.gp, self.sp, self.cp)
    }
}

/// The three saving throw modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingThrows {
    /// Reflex (from agility).
    pub reflex: i32,
    /// Fortitude (from stamina).
    pub fortitude: i32,
    /// Willpower (from personality).
    pub willpower: i32,
}

/// A character record that breaks one of the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("character invariant violated: {0}")]
pub struct InvariantViolation(pub String);

/// A fully generated zero-level character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Ability scores and modifiers.
    pub abilities: Abilities,
    /// Whether the modifier sum is at least zero.
    pub suitable: bool,
    /// The lucky sign rolled on the luck table.
    pub lucky_sign: LuckySign,
    /// Saving throw modifiers.
    pub saving_throws: SavingThrows,
    /// Race.
    pub race: Race,
    /// Racial traits, in sheet order.
    pub racial_traits: Vec<String>,
    /// Occupation, possibly adjusted (e.g. "Turnip farmer").
    pub occupation: String,
    /// Trained weapon, with ammunition for missile weapons.
    pub trained_weapon: String,
    /// Trade good; empty when the occupation grants coin instead.
    pub trade_goods: String,
    /// Known languages; "Common" first.
    pub languages: Vec<String>,
    /// Starting coin.
    pub money: Money,
    /// Damage die of the trained weapon.
    pub trained_weapon_damage: String,
    /// Short/medium/long range of the trained weapon.
    pub trained_weapon_range: String,
    /// Starting equipment.
    pub equipment: Vec<String>,
    /// Movement per round, e.g. "30'".
    pub speed: String,
    /// Initiative modifier.
    pub initiative: i32,
    /// Hit points, never below one.
    pub hit_points: i32,
    /// Armor class.
    pub armor_class: i32,
    /// Wizard spells known adjustment for this intelligence.
    pub wizard_spells_known: String,
    /// Maximum spell level for this intelligence.
    pub max_spell_level: String,
}

impl Character {
    /// Sum of all six ability modifiers.
    pub fn modifier_sum(&self) -> i32 {
        self.abilities.modifier_sum()
    }

    /// Check the record invariants that hold for every generated character.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for ability in Ability::ALL {
            let score = self.abilities.get(ability).score;
            if !(3..=18).contains(&score) {
                return Err(InvariantViolation(format!(
                    "{ability} score {score} outside 3-18"
                )));
            }
        }

        if self.hit_points < 1 {
            return Err(InvariantViolation(format!(
                "hit points {} below 1",
                self.hit_points
            )));
        }

        if self.suitable != (self.modifier_sum() >= 0) {
            return Err(InvariantViolation(
                "suitability flag disagrees with modifier sum".to_string(),
            ));
        }

        if self.languages.first().map(String::as_str) != Some("Common") {
            return Err(InvariantViolation(
                "languages must start with Common".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.languages.iter().find(|l| !seen.insert(l.as_str())) {
            return Err(InvariantViolation(format!("duplicate language {dup}")));
        }

        let illiterate = self.languages.iter().position(|l| l == "Illiterate");
        if illiterate.is_some_and(|pos| pos + 1 != self.languages.len()) {
            return Err(InvariantViolation(
                "Illiterate must be the last language".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ability in Ability::ALL {
            let a = self.abilities.get(ability);
            writeln!(f, "{ability} score: {}", a.score)?;
            writeln!(f, "{ability} modifier: {}", a.modifier)?;
        }
        writeln!(f, "Lucky sign: {}", self.lucky_sign)?;
        writeln!(f, "Reflex saving throw: {}", self.saving_throws.reflex)?;
        writeln!(f, "Fortitude saving throw: {}", self.saving_throws.fortitude)?;
        writeln!(f, "Willpower saving throw: {}", self.saving_throws.willpower)?;
        writeln!(f, "Race: {}", self.race)?;
        writeln!(f, "Racial traits: {}", self.racial_traits.join(", "))?;
        writeln!(f, "Occupation: {}", self.occupation)?;
        writeln!(f, "Trained weapon: {}", self.trained_weapon)?;
        writeln!(f, "Trade goods: {}", self.trade_goods)?;
        writeln!(f, "Languages: {}", self.languages.join(", "))?;
        writeln!(f, "Money: {}", self.money)?;
        writeln!(f, "Equipment: {}", self.equipment.join(", "))?;
        writeln!(f, "Speed: {}", self.speed)?;
        writeln!(f, "Initiative: {}", self.initiative)?;
        writeln!(f, "Hit points: {}", self.hit_points)?;
        write!(f, "Armor class: {}", self.armor_class)
    }
}
