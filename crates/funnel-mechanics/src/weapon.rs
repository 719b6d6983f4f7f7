//! Weapon classification for damage and range.
//!
//! Occupation tables name weapons loosely ("Pitchfork (as spear)",
//! "Cleaver (as axe)"). A weapon is classified by the first class whose
//! keyword appears in its name, ignoring case. Anything unrecognized is
//! fought with as an improvised subdual weapon.

use serde::{Deserialize, Serialize};

/// The canonical weapon a trained weapon counts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    /// Dagger and knife-like tools.
    Dagger,
    /// Spear.
    Spear,
    /// Staff.
    Staff,
    /// Club.
    Club,
    /// Axe (thrown).
    Axe,
    /// Short sword.
    ShortSword,
    /// Dart.
    Dart,
    /// Shortbow.
    Shortbow,
    /// Sling.
    Sling,
    /// Longsword.
    Longsword,
    /// Mace.
    Mace,
    /// No recognized weapon.
    Subdual,
}

impl WeaponClass {
    /// Classes in the order their keywords are searched.
    const SEARCH_ORDER: [(&'static str, WeaponClass); 11] = [
        ("dagger", Self::Dagger),
        ("spear", Self::Spear),
        ("staff", Self::Staff),
        ("club", Self::Club),
        ("axe", Self::Axe),
        ("short sword", Self::ShortSword),
        ("dart", Self::Dart),
        ("shortbow", Self::Shortbow),
        ("sling", Self::Sling),
        ("longsword", Self::Longsword),
        ("mace", Self::Mace),
    ];

    /// Classify a weapon name by case-insensitive keyword search.
    pub fn classify(weapon: &str) -> Self {
        let lower = weapon.to_lowercase();
        Self::SEARCH_ORDER
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map_or(Self::Subdual, |(_, class)| *class)
    }

    /// Damage die.
    pub fn damage(self) -> &'static str {
        match self {
            Self::Dagger | Self::Staff | Self::Club | Self::Dart | Self::Sling => "1d4",
            Self::Axe | Self::ShortSword | Self::Shortbow | Self::Mace => "1d6",
            Self::Spear | Self::Longsword => "1d8",
            Self::Subdual => "1d3 subdual",
        }
    }

    /// Short/medium/long range in feet; `*` marks a thrown weapon.
    pub fn range(self) -> &'static str {
        match self {
            Self::Axe => "10/20/30*",
            Self::Dart => "20/40/60*",
            Self::Shortbow => "50/100/150",
            Self::Sling => "40/80/160*",
            _ => "0/0/0",
        }
    }

    /// Whether the weapon needs ammunition.
    pub fn uses_ammo(weapon: &str) -> bool {
        matches!(weapon, "Shortbow" | "Sling")
    }
}
