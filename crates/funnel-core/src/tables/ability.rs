//! Ability score modifier table (scores 3-18).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::data_lines;
use crate::error::{TableError, TableResult};

/// File name of the ability score modifier table.
pub const FILE: &str = "Table1_1_Ability_Score_Modifiers.csv";

/// One row of the ability score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRow {
    /// Modifier applied wherever this ability feeds a derived stat.
    pub modifier: i32,
    /// Wizard spells known adjustment (meaningful for intelligence only).
    pub wizard_spells_known: String,
    /// Highest castable spell level (meaningful for intelligence only).
    pub max_spell_level: String,
}

/// Mapping from raw ability score to its modifier row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityModifierTable {
    rows: BTreeMap<u32, AbilityRow>,
}

impl AbilityModifierTable {
    /// Parse the CSV form: `score,modifier,spells known,max spell level`.
    pub fn parse(text: &str) -> TableResult<Self> {
        let mut rows = BTreeMap::new();
        for (line_no, line) in data_lines(text) {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields[0] == "Ability Score" {
                continue;
            }
            if fields.len() != 4 {
                return Err(TableError::parse(
                    FILE,
                    line_no,
                    format!("expected 4 fields, found {}", fields.len()),
                ));
            }
            let score: u32 = fields[0].parse().map_err(|_| {
                TableError::parse(FILE, line_no, format!("bad score '{}'", fields[0]))
            })?;
            let modifier: i32 = fields[1].parse().map_err(|_| {
                TableError::parse(FILE, line_no, format!("bad modifier '{}'", fields[1]))
            })?;
            rows.insert(
                score,
                AbilityRow {
                    modifier,
                    wizard_spells_known: fields[2].to_string(),
                    max_spell_level: fields[3].to_string(),
                },
            );
        }
        Ok(Self { rows })
    }

    /// Look up the row for a raw score.
    pub fn get(&self, score: u32) -> Option<&AbilityRow> {
        self.rows.get(&score)
    }

    /// Look up only the modifier for a raw score.
    pub fn modifier(&self, score: u32) -> Option<i32> {
        self.get(score).map(|row| row.modifier)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every score a 3d6 roll can produce must be present.
    pub fn validate(&self) -> TableResult<()> {
        let missing: Vec<String> = (3..=18)
            .filter(|s| !self.rows.contains_key(s))
            .map(|s| s.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TableError::invalid(
                FILE,
                format!("missing scores: {}", missing.join(", ")),
            ))
        }
    }
}
