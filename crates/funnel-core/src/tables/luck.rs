//! Lucky signs and the derived stats they modify.
//!
//! Each sign is a `name: effect` line from the luck table. The mechanical
//! effects are resolved once, when the table is loaded, by matching fixed
//! trigger phrases against the full line. A sign may carry more than one
//! effect if several triggers happen to match.

use serde::{Deserialize, Serialize};

use super::data_lines;
use crate::error::{TableError, TableResult};

/// File name of the lucky sign list.
pub const FILE: &str = "Table1_2_Luck_Score.txt";

/// Number of signs on the luck table (one per face of a d30).
pub const SIGN_COUNT: usize = 30;

/// A derived stat that receives the luck modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckEffect {
    /// Reflex, fortitude, and willpower saves.
    AllSavingThrows,
    /// Reflex save only.
    ReflexSave,
    /// Fortitude save only.
    FortitudeSave,
    /// Willpower save only.
    WillpowerSave,
    /// Armor class.
    ArmorClass,
    /// Initiative.
    Initiative,
    /// Starting hit points.
    HitPoints,
    /// Number of bonus languages.
    Languages,
    /// Movement speed, five feet per point.
    Speed,
}

impl LuckEffect {
    /// Trigger phrase and resulting effect, checked by substring against the sign line.
    pub const TRIGGERS: &'static [(&'static str, LuckEffect)] = &[
        ("Lucky sign: Saving throws", LuckEffect::AllSavingThrows),
        ("Struck by lightning", LuckEffect::ReflexSave),
        ("Lived through famine", LuckEffect::FortitudeSave),
        ("Resisted temptation", LuckEffect::WillpowerSave),
        ("Charmed house", LuckEffect::ArmorClass),
        ("Speed of the cobra", LuckEffect::Initiative),
        ("Bountiful harvest", LuckEffect::HitPoints),
        ("Birdsong", LuckEffect::Languages),
        ("Wild child", LuckEffect::Speed),
    ];

    /// All effects whose trigger phrase occurs in `text`.
    pub fn detect(text: &str) -> Vec<LuckEffect> {
        Self::TRIGGERS
            .iter()
            .filter(|(phrase, _)| text.contains(phrase))
            .map(|(_, effect)| *effect)
            .collect()
    }
}

/// One entry of the luck table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckySign {
    /// The sign's name, e.g. "Charmed house".
    pub name: String,
    /// What the luck modifier applies to, e.g. "Armor class".
    pub description: String,
    /// Mechanical effects recognized in this sign.
    pub effects: Vec<LuckEffect>,
}

impl LuckySign {
    /// Build a sign from a `name: description` line.
    pub fn from_line(line: &str) -> Option<Self> {
        let (name, description) = line.split_once(": ")?;
        Some(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            effects: LuckEffect::detect(line),
        })
    }

    /// Whether the luck modifier applies to the given effect.
    pub fn has(&self, effect: LuckEffect) -> bool {
        self.effects.contains(&effect)
    }

    /// Luck modifier contribution for `effect`: the modifier if the sign
    /// carries it, zero otherwise.
    pub fn bonus(&self, effect: LuckEffect, luck_modifier: i32) -> i32 {
        if self.has(effect) { luck_modifier } else { 0 }
    }
}

impl std::fmt::Display for LuckySign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Parse the luck table, one sign per line.
pub fn parse(text: &str) -> TableResult<Vec<LuckySign>> {
    data_lines(text)
        .map(|(line_no, line)| {
            LuckySign::from_line(line)
                .ok_or_else(|| TableError::parse(FILE, line_no, "expected 'sign: effect'"))
        })
        .collect()
}
