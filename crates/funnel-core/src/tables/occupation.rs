//! Per-race occupation tables keyed by the upper bound of a roll range.

use serde::{Deserialize, Serialize};

use super::data_lines;
use crate::error::{TableError, TableResult};

/// One occupation row: every roll up to and including `upper_bound`
/// (and above the previous row's bound) selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationEntry {
    /// Highest roll that selects this row.
    pub upper_bound: u32,
    /// Occupation name, e.g. "Farmer".
    pub occupation: String,
    /// Trained weapon, e.g. "Pitchfork (as spear)".
    pub trained_weapon: String,
    /// Starting trade good; may be empty.
    pub trade_goods: String,
}

/// An occupation table, rows in ascending bound order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationTable {
    entries: Vec<OccupationEntry>,
}

impl OccupationTable {
    /// Parse the `/`-separated form: `bound/occupation/weapon/trade good`.
    pub fn parse(file: &str, text: &str) -> TableResult<Self> {
        let mut entries = Vec::new();
        for (line_no, line) in data_lines(text) {
            let fields: Vec<&str> = line.splitn(4, '/').map(str::trim).collect();
            if fields[0] == "Roll" {
                continue;
            }
            if fields.len() != 4 {
                return Err(TableError::parse(
                    file,
                    line_no,
                    format!("expected 4 fields, found {}", fields.len()),
                ));
            }
            let upper_bound: u32 = fields[0].parse().map_err(|_| {
                TableError::parse(file, line_no, format!("bad roll bound '{}'", fields[0]))
            })?;
            entries.push(OccupationEntry {
                upper_bound,
                occupation: fields[1].to_string(),
                trained_weapon: fields[2].to_string(),
                trade_goods: fields[3].to_string(),
            });
        }
        entries.sort_by_key(|e| e.upper_bound);
        Ok(Self { entries })
    }

    /// The first row whose upper bound is at or above `roll`.
    pub fn lookup(&self, roll: u32) -> Option<&OccupationEntry> {
        self.entries.iter().find(|e| roll <= e.upper_bound)
    }

    /// All rows in ascending bound order.
    pub fn entries(&self) -> &[OccupationEntry] {
        &self.entries
    }

    /// The inclusive roll range `(low, high)` covered by each row.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32, &OccupationEntry)> {
        let mut low = 1;
        self.entries.iter().map(move |e| {
            let range = (low, e.upper_bound, e);
            low = e.upper_bound + 1;
            range
        })
    }

    /// Check that the rows partition `[1, range_max]` with no gaps, overlaps,
    /// or rows past the end.
    pub fn validate(&self, file: &str, range_max: u32) -> TableResult<()> {
        if self.entries.is_empty() {
            return Err(TableError::invalid(file, "table is empty"));
        }
        let mut previous = 0;
        for entry in &self.entries {
            if entry.upper_bound == previous {
                return Err(TableError::invalid(
                    file,
                    format!("duplicate bound {}", entry.upper_bound),
                ));
            }
            if entry.occupation.is_empty() {
                return Err(TableError::invalid(
                    file,
                    format!("row {} has no occupation", entry.upper_bound),
                ));
            }
            previous = entry.upper_bound;
        }
        if previous != range_max {
            return Err(TableError::invalid(
                file,
                format!("rows end at {previous}, expected {range_max}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Roll/Occupation/Trained Weapon/Trade Goods\n\
                          1/Elven artisan/Staff/Clay, 1 lb.\n\
                          4/Elven falconer/Dagger/Falcon\n\
                          10/Elven sage/Dagger/\n";

    #[test]
    fn lookup_first_bound_at_or_above_roll() {
        let table = OccupationTable::parse("Elf_Occupations.csv", SAMPLE).unwrap();
        assert_eq!(table.lookup(1).unwrap().occupation, "Elven artisan");
        assert_eq!(table.lookup(2).unwrap().occupation, "Elven falconer");
        assert_eq!(table.lookup(4).unwrap().occupation, "Elven falconer");
        assert_eq!(table.lookup(5).unwrap().occupation, "Elven sage");
        assert!(table.lookup(11).is_none());
    }

    #[test]
    fn empty_trade_good_is_kept() {
        let table = OccupationTable::parse("Elf_Occupations.csv", SAMPLE).unwrap();
        assert_eq!(table.lookup(10).unwrap().trade_goods, "");
    }

    #[test]
    fn ranges_cover_table() {
        let table = OccupationTable::parse("Elf_Occupations.csv", SAMPLE).unwrap();
        let ranges: Vec<(u32, u32)> = table.ranges().map(|(lo, hi, _)| (lo, hi)).collect();
        assert_eq!(ranges, vec![(1, 1), (2, 4), (5, 10)]);
    }

    #[test]
    fn validate_partition() {
        let table = OccupationTable::parse("Elf_Occupations.csv", SAMPLE).unwrap();
        assert!(table.validate("Elf_Occupations.csv", 10).is_ok());
        assert!(table.validate("Elf_Occupations.csv", 12).is_err());
    }

    #[test]
    fn validate_rejects_duplicate_bounds() {
        let text = "1/A/Club/\n1/B/Club/\n2/C/Club/\n";
        let table = OccupationTable::parse("x.csv", text).unwrap();
        let err = table.validate("x.csv", 2).unwrap_err();
        assert!(err.to_string().contains("duplicate bound 1"));
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let err = OccupationTable::parse("x.csv", "1/Alchemist\n").unwrap_err();
        assert_eq!(err.to_string(), "x.csv:1: expected 4 fields, found 2");
    }
}
