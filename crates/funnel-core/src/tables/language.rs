//! Bonus language eligibility table.
//!
//! Each row names a language and, per column, the highest d100 roll that
//! grants it (or `-` when that column can never learn it). Rows are
//! scanned top to bottom; the first eligible row whose threshold is at or
//! above the roll wins.

use serde::{Deserialize, Serialize};

use super::data_lines;
use crate::error::{TableError, TableResult};
use crate::race::Race;

/// File name of the language table.
pub const FILE: &str = "AppendixL.csv";

/// A column of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageColumn {
    /// Zero-level human.
    Human,
    /// Warrior.
    Warrior,
    /// Cleric.
    Cleric,
    /// Thief.
    Thief,
    /// Wizard.
    Wizard,
    /// Halfling.
    Halfling,
    /// Elf.
    Elf,
    /// Dwarf.
    Dwarf,
}

impl LanguageColumn {
    /// Columns in file order.
    pub const ALL: [LanguageColumn; 8] = [
        Self::Human,
        Self::Warrior,
        Self::Cleric,
        Self::Thief,
        Self::Wizard,
        Self::Halfling,
        Self::Elf,
        Self::Dwarf,
    ];

    fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Warrior => 1,
            Self::Cleric => 2,
            Self::Thief => 3,
            Self::Wizard => 4,
            Self::Halfling => 5,
            Self::Elf => 6,
            Self::Dwarf => 7,
        }
    }
}

impl From<Race> for LanguageColumn {
    fn from(race: Race) -> Self {
        match race {
            Race::Human => Self::Human,
            Race::Dwarf => Self::Dwarf,
            Race::Elf => Self::Elf,
            Race::Halfling => Self::Halfling,
        }
    }
}

impl std::fmt::Display for LanguageColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One language and its per-column roll thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRow {
    /// Language name.
    pub language: String,
    /// Threshold per column; `None` means ineligible.
    pub thresholds: [Option<u32>; 8],
}

impl LanguageRow {
    /// Threshold for a column, `None` if ineligible.
    pub fn threshold(&self, column: LanguageColumn) -> Option<u32> {
        self.thresholds[column.index()]
    }
}

/// The full language eligibility table, rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    rows: Vec<LanguageRow>,
}

impl LanguageTable {
    /// Parse the CSV form: `language,human,warrior,cleric,thief,wizard,halfling,elf,dwarf`.
    pub fn parse(text: &str) -> TableResult<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in data_lines(text) {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields[0] == "Language" {
                continue;
            }
            if fields.len() != 9 {
                return Err(TableError::parse(
                    FILE,
                    line_no,
                    format!("expected 9 fields, found {}", fields.len()),
                ));
            }
            let mut thresholds = [None; 8];
            for (slot, raw) in thresholds.iter_mut().zip(&fields[1..]) {
                *slot = match *raw {
                    "-" => None,
                    n => Some(n.parse::<u32>().map_err(|_| {
                        TableError::parse(FILE, line_no, format!("bad threshold '{n}'"))
                    })?),
                };
            }
            rows.push(LanguageRow {
                language: fields[0].to_string(),
                thresholds,
            });
        }
        Ok(Self { rows })
    }

    /// The language a d100 `roll` grants in `column`, if any.
    pub fn lookup(&self, column: LanguageColumn, roll: u32) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.threshold(column).is_some_and(|t| roll <= t))
            .map(|row| row.language.as_str())
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[LanguageRow] {
        &self.rows
    }

    /// Languages a column can ever learn.
    pub fn eligible(&self, column: LanguageColumn) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(move |row| row.threshold(column).is_some())
            .map(|row| row.language.as_str())
    }

    /// Every column must have non-decreasing thresholds that end at 100, so
    /// each d100 roll lands on some language.
    pub fn validate(&self) -> TableResult<()> {
        for column in LanguageColumn::ALL {
            let mut previous = 0;
            for row in &self.rows {
                let Some(t) = row.threshold(column) else {
                    continue;
                };
                if t < previous || t > 100 {
                    return Err(TableError::invalid(
                        FILE,
                        format!(
                            "{column} threshold for {} is {t}, previous was {previous}",
                            row.language
                        ),
                    ));
                }
                previous = t;
            }
            if previous != 100 {
                return Err(TableError::invalid(
                    FILE,
                    format!("{column} column ends at {previous}, expected 100"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Language,Human,Warrior,Cleric,Thief,Wizard,Halfling,Elf,Dwarf\n\
                          Chaos,40,40,40,40,40,40,40,40\n\
                          Dwarf,70,70,70,70,70,70,70,-\n\
                          Giant,100,100,100,100,100,100,100,100\n";

    #[test]
    fn lookup_scans_eligible_rows() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        assert_eq!(table.lookup(LanguageColumn::Human, 1), Some("Chaos"));
        assert_eq!(table.lookup(LanguageColumn::Human, 41), Some("Dwarf"));
        assert_eq!(table.lookup(LanguageColumn::Dwarf, 41), Some("Giant"));
        assert_eq!(table.lookup(LanguageColumn::Human, 100), Some("Giant"));
    }

    #[test]
    fn race_maps_to_column() {
        assert_eq!(LanguageColumn::from(Race::Elf), LanguageColumn::Elf);
        assert_eq!(LanguageColumn::from(Race::Human), LanguageColumn::Human);
    }

    #[test]
    fn eligible_skips_dashes() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        let langs: Vec<&str> = table.eligible(LanguageColumn::Dwarf).collect();
        assert_eq!(langs, vec!["Chaos", "Giant"]);
    }

    #[test]
    fn validate_requires_full_coverage() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        assert!(table.validate().is_ok());

        let short = LanguageTable::parse("Chaos,40,40,40,40,40,40,40,40\n").unwrap();
        let err = short.validate().unwrap_err();
        assert!(err.to_string().contains("Human column ends at 40"));
    }

    #[test]
    fn validate_rejects_decreasing_thresholds() {
        let text = "Chaos,60,100,100,100,100,100,100,100\nLaw,50,100,100,100,100,100,100,100\n";
        let table = LanguageTable::parse(text).unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn bad_threshold_is_parse_error() {
        let err = LanguageTable::parse("Chaos,x,1,1,1,1,1,1,1\n").unwrap_err();
        assert_eq!(err.to_string(), format!("{FILE}:1: bad threshold 'x'"));
    }
}
