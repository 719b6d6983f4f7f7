//! The rule table store.
//!
//! [`RuleTables`] owns every lookup table the generator reads: ability
//! modifiers, lucky signs, one occupation table per race, language
//! eligibility, and the flavor lists (farmer types, animals, cart contents,
//! equipment). Tables are parsed from flat files, either the copies embedded
//! in this crate ([`RuleTables::builtin`]) or a directory on disk
//! ([`RuleTables::load_dir`]), and are validated before being handed out.
//! Once built they are read-only and can be shared freely.

pub mod ability;
pub mod language;
pub mod luck;
pub mod occupation;

pub use ability::{AbilityModifierTable, AbilityRow};
pub use language::{LanguageColumn, LanguageRow, LanguageTable};
pub use luck::{LuckEffect, LuckySign};
pub use occupation::{OccupationEntry, OccupationTable};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::race::Race;

/// File name of the farmer type list.
pub const FARMER_TYPE_FILE: &str = "Table1_3a_Farmer_Type.txt";
/// File name of the animal type list.
pub const ANIMAL_TYPE_FILE: &str = "Table1_3b_Animal_Type.txt";
/// File name of the cart contents list.
pub const CART_CONTENTS_FILE: &str = "Table1_3c_Whats_In_The_Cart.txt";
/// File name of the equipment list.
pub const EQUIPMENT_FILE: &str = "Table3_4_Equipment.txt";

/// Embedded default table files, keyed by file name.
const BUILTIN: &[(&str, &str)] = &[
    (
        ability::FILE,
        include_str!("../../data/Table1_1_Ability_Score_Modifiers.csv"),
    ),
    (luck::FILE, include_str!("../../data/Table1_2_Luck_Score.txt")),
    (
        "Human_Occupations.csv",
        include_str!("../../data/Human_Occupations.csv"),
    ),
    (
        "Dwarf_Occupations.csv",
        include_str!("../../data/Dwarf_Occupations.csv"),
    ),
    (
        "Elf_Occupations.csv",
        include_str!("../../data/Elf_Occupations.csv"),
    ),
    (
        "Halfling_Occupations.csv",
        include_str!("../../data/Halfling_Occupations.csv"),
    ),
    (
        FARMER_TYPE_FILE,
        include_str!("../../data/Table1_3a_Farmer_Type.txt"),
    ),
    (
        ANIMAL_TYPE_FILE,
        include_str!("../../data/Table1_3b_Animal_Type.txt"),
    ),
    (
        CART_CONTENTS_FILE,
        include_str!("../../data/Table1_3c_Whats_In_The_Cart.txt"),
    ),
    (EQUIPMENT_FILE, include_str!("../../data/Table3_4_Equipment.txt")),
    (language::FILE, include_str!("../../data/AppendixL.csv")),
];

/// Minimum flavor list sizes, set by the largest roll made against each list.
const MIN_FARMER_TYPES: usize = 8;
const MIN_ANIMAL_TYPES: usize = 7;
const MIN_CART_CONTENTS: usize = 6;
const MIN_EQUIPMENT: usize = 24;

/// Non-blank lines of a table file with their 1-based line numbers.
pub(crate) fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Parse a one-entry-per-line list.
fn parse_list(text: &str) -> Vec<String> {
    data_lines(text)
        .map(|(_, line)| line.trim().to_string())
        .collect()
}

/// Every table the generator consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTables {
    /// Raw ability score to modifier.
    pub ability_modifiers: AbilityModifierTable,
    /// The 30 lucky signs, indexed by d30 roll minus one.
    pub lucky_signs: Vec<LuckySign>,
    /// Human occupations (d70).
    pub human_occupations: OccupationTable,
    /// Dwarf occupations (d10).
    pub dwarf_occupations: OccupationTable,
    /// Elf occupations (d10).
    pub elf_occupations: OccupationTable,
    /// Halfling occupations (d10).
    pub halfling_occupations: OccupationTable,
    /// Bonus language eligibility.
    pub languages: LanguageTable,
    /// Crops a farmer may grow.
    pub farmer_types: Vec<String>,
    /// Animals that may replace a herder's or farmer's trade good.
    pub animal_types: Vec<String>,
    /// What a wainwright's pushcart may hold.
    pub cart_contents: Vec<String>,
    /// Bonus starting equipment.
    pub equipment: Vec<String>,
}

impl RuleTables {
    /// Names of every table file, in load order.
    pub fn file_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }

    /// The default tables embedded in this crate.
    pub fn builtin() -> TableResult<Self> {
        Self::assemble(|name| {
            BUILTIN
                .iter()
                .find(|(file, _)| *file == name)
                .map(|(_, text)| (*text).to_string())
                .ok_or_else(|| TableError::invalid(name, "no built-in copy"))
        })
    }

    /// Load every table file from `dir`.
    pub fn load_dir(dir: &Path) -> TableResult<Self> {
        Self::assemble(|name| {
            let path = dir.join(name);
            log::debug!("loading table {}", path.display());
            std::fs::read_to_string(&path).map_err(|source| TableError::Io { path, source })
        })
    }

    /// Write the built-in table files into `dir`, creating it if needed.
    pub fn write_builtin(dir: &Path) -> TableResult<()> {
        std::fs::create_dir_all(dir).map_err(|source| TableError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        for (name, text) in BUILTIN {
            let path = dir.join(name);
            std::fs::write(&path, text).map_err(|source| TableError::Io { path, source })?;
        }
        Ok(())
    }

    fn assemble(read: impl Fn(&str) -> TableResult<String>) -> TableResult<Self> {
        let occupations = |race: Race| -> TableResult<OccupationTable> {
            let file = race.occupation_file();
            OccupationTable::parse(file, &read(file)?)
        };

        let tables = Self {
            ability_modifiers: AbilityModifierTable::parse(&read(ability::FILE)?)?,
            lucky_signs: luck::parse(&read(luck::FILE)?)?,
            human_occupations: occupations(Race::Human)?,
            dwarf_occupations: occupations(Race::Dwarf)?,
            elf_occupations: occupations(Race::Elf)?,
            halfling_occupations: occupations(Race::Halfling)?,
            languages: LanguageTable::parse(&read(language::FILE)?)?,
            farmer_types: parse_list(&read(FARMER_TYPE_FILE)?),
            animal_types: parse_list(&read(ANIMAL_TYPE_FILE)?),
            cart_contents: parse_list(&read(CART_CONTENTS_FILE)?),
            equipment: parse_list(&read(EQUIPMENT_FILE)?),
        };
        tables.validate()?;
        Ok(tables)
    }

    /// The occupation table for a race.
    pub fn occupations(&self, race: Race) -> &OccupationTable {
        match race {
            Race::Human => &self.human_occupations,
            Race::Dwarf => &self.dwarf_occupations,
            Race::Elf => &self.elf_occupations,
            Race::Halfling => &self.halfling_occupations,
        }
    }

    /// Check that every legal roll against every table lands on an entry.
    pub fn validate(&self) -> TableResult<()> {
        self.ability_modifiers.validate()?;

        if self.lucky_signs.len() != luck::SIGN_COUNT {
            return Err(TableError::invalid(
                luck::FILE,
                format!(
                    "expected {} signs, found {}",
                    luck::SIGN_COUNT,
                    self.lucky_signs.len()
                ),
            ));
        }

        for race in Race::all() {
            self.occupations(*race)
                .validate(race.occupation_file(), race.occupation_range())?;
        }

        self.languages.validate()?;

        let lists = [
            (FARMER_TYPE_FILE, self.farmer_types.len(), MIN_FARMER_TYPES),
            (ANIMAL_TYPE_FILE, self.animal_types.len(), MIN_ANIMAL_TYPES),
            (CART_CONTENTS_FILE, self.cart_contents.len(), MIN_CART_CONTENTS),
            (EQUIPMENT_FILE, self.equipment.len(), MIN_EQUIPMENT),
        ];
        for (file, len, min) in lists {
            if len < min {
                return Err(TableError::invalid(
                    file,
                    format!("expected at least {min} entries, found {len}"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_tables_are_valid() {
        let tables = RuleTables::builtin().unwrap();
        assert_eq!(tables.ability_modifiers.len(), 16);
        assert_eq!(tables.lucky_signs.len(), 30);
        assert_eq!(tables.farmer_types.len(), 8);
        assert_eq!(tables.animal_types.len(), 7);
        assert_eq!(tables.cart_contents.len(), 6);
        assert_eq!(tables.equipment.len(), 24);
    }

    #[test]
    fn builtin_modifier_extremes() {
        let tables = RuleTables::builtin().unwrap();
        assert_eq!(tables.ability_modifiers.modifier(3), Some(-3));
        assert_eq!(tables.ability_modifiers.modifier(10), Some(0));
        assert_eq!(tables.ability_modifiers.modifier(18), Some(3));
    }

    #[test]
    fn builtin_occupation_tables_partition_their_range() {
        let tables = RuleTables::builtin().unwrap();
        for race in Race::all() {
            let table = tables.occupations(*race);
            for roll in 1..=race.occupation_range() {
                let hits = table
                    .ranges()
                    .filter(|(lo, hi, _)| (*lo..=*hi).contains(&roll))
                    .count();
                assert_eq!(hits, 1, "{race} roll {roll}");
            }
        }
    }

    #[test]
    fn builtin_lucky_sign_effects() {
        let tables = RuleTables::builtin().unwrap();
        let with_effects: Vec<&str> = tables
            .lucky_signs
            .iter()
            .filter(|s| !s.effects.is_empty())
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            with_effects,
            vec![
                "Lucky sign",
                "Struck by lightning",
                "Lived through famine",
                "Resisted temptation",
                "Charmed house",
                "Speed of the cobra",
                "Bountiful harvest",
                "Birdsong",
                "Wild child",
            ]
        );
        assert!(
            tables
                .lucky_signs
                .iter()
                .all(|s| s.effects.len() <= 1)
        );
    }

    #[test]
    fn builtin_languages_exclude_own_race() {
        let tables = RuleTables::builtin().unwrap();
        for race in [Race::Dwarf, Race::Elf, Race::Halfling] {
            let own = race.to_string();
            assert!(
                tables
                    .languages
                    .eligible(race.into())
                    .all(|lang| lang != own)
            );
        }
    }

    #[test]
    fn write_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        RuleTables::write_builtin(dir.path()).unwrap();
        for name in RuleTables::file_names() {
            assert!(dir.path().join(name).exists(), "{name}");
        }
        let loaded = RuleTables::load_dir(dir.path()).unwrap();
        assert_eq!(loaded, RuleTables::builtin().unwrap());
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        RuleTables::write_builtin(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join(EQUIPMENT_FILE)).unwrap();
        let err = RuleTables::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
        assert!(err.to_string().contains(EQUIPMENT_FILE));
    }

    #[test]
    fn load_dir_rejects_gappy_occupation_table() {
        let dir = TempDir::new().unwrap();
        RuleTables::write_builtin(dir.path()).unwrap();
        std::fs::write(
            dir.path().join("Elf_Occupations.csv"),
            "Roll/Occupation/Trained Weapon/Trade Goods\n1/Elven sage/Dagger/Book\n9/Elven artisan/Staff/Clay\n",
        )
        .unwrap();
        let err = RuleTables::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("rows end at 9, expected 10"));
    }

    #[test]
    fn short_equipment_list_is_invalid() {
        let mut tables = RuleTables::builtin().unwrap();
        tables.equipment.truncate(10);
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("at least 24"));
    }

    #[test]
    fn data_lines_skip_blanks_and_keep_numbers() {
        let lines: Vec<(usize, &str)> = data_lines("a\n\n  \nb\r\n").collect();
        assert_eq!(lines, vec![(1, "a"), (4, "b")]);
    }
}
