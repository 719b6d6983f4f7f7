//! Character races and their fixed racial traits.

use serde::{Deserialize, Serialize};

/// One of the four playable races of a zero-level character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// Humans have no racial traits and the widest occupation table.
    Human,
    /// Dwarves.
    Dwarf,
    /// Elves.
    Elf,
    /// Halflings.
    Halfling,
}

impl Race {
    /// All races, in the order they are listed on the sheet.
    pub fn all() -> &'static [Self] {
        &[Self::Human, Self::Dwarf, Self::Elf, Self::Halfling]
    }

    /// Map a d10 race roll onto a race: 1 dwarf, 2 elf, 3 halfling, anything else human.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => Self::Dwarf,
            2 => Self::Elf,
            3 => Self::Halfling,
            _ => Self::Human,
        }
    }

    /// Parse a race name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "dwarf" => Some(Self::Dwarf),
            "elf" => Some(Self::Elf),
            "halfling" => Some(Self::Halfling),
            _ => None,
        }
    }

    /// True for dwarves, elves, and halflings.
    pub fn is_demi_human(self) -> bool {
        !matches!(self, Self::Human)
    }

    /// The die size rolled on this race's occupation table.
    pub fn occupation_range(self) -> u32 {
        match self {
            Self::Human => 70,
            _ => 10,
        }
    }

    /// The fixed racial traits, in sheet order.
    pub fn traits(self) -> &'static [&'static str] {
        match self {
            Self::Human => &[],
            Self::Dwarf => &["Infravision", "Underground skills"],
            Self::Elf => &[
                "Infravision",
                "Immune to magic sleep/paralysis",
                "Heightened senses",
                "Iron vulnerability",
            ],
            Self::Halfling => &["Infravision", "Small size"],
        }
    }

    /// Base movement in feet before any lucky-sign adjustment.
    pub fn base_speed(self) -> i32 {
        match self {
            Self::Dwarf | Self::Halfling => 20,
            Self::Human | Self::Elf => 30,
        }
    }

    /// Name of the flat file holding this race's occupation table.
    pub fn occupation_file(self) -> &'static str {
        match self {
            Self::Human => "Human_Occupations.csv",
            Self::Dwarf => "Dwarf_Occupations.csv",
            Self::Elf => "Elf_Occupations.csv",
            Self::Halfling => "Halfling_Occupations.csv",
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Dwarf => write!(f, "Dwarf"),
            Self::Elf => write!(f, "Elf"),
            Self::Halfling => write!(f, "Halfling"),
        }
    }
}

/// Caller-supplied race exclusions.
///
/// If every race is excluded the exclusions are dropped entirely; see
/// [`RaceExclusions::effective`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceExclusions {
    /// Never produce a human.
    pub human: bool,
    /// Never produce a dwarf.
    pub dwarf: bool,
    /// Never produce an elf.
    pub elf: bool,
    /// Never produce a halfling.
    pub halfling: bool,
}

impl RaceExclusions {
    /// No race excluded.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when every race is excluded.
    pub fn excludes_all(&self) -> bool {
        self.human && self.dwarf && self.elf && self.halfling
    }

    /// The exclusions actually applied: identical to `self`, unless every
    /// race is excluded, in which case nothing is.
    pub fn effective(self) -> Self {
        if self.excludes_all() {
            Self::none()
        } else {
            self
        }
    }

    /// Whether the given race is excluded.
    pub fn excludes(&self, race: Race) -> bool {
        match race {
            Race::Human => self.human,
            Race::Dwarf => self.dwarf,
            Race::Elf => self.elf,
            Race::Halfling => self.halfling,
        }
    }
}
