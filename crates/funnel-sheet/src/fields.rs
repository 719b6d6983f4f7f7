//! Sheet field formatting.
//!
//! The printed sheet has fixed-width boxes, so numbers are padded to two
//! characters and long lists are split over two lines. [`SheetFields`]
//! holds every slot of the sheet already formatted; all renderers that
//! mimic the sheet read from it.

use serde::Serialize;

use funnel_core::{Character, Money};

/// Which half of a list to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Items before the midpoint.
    First,
    /// Items from the midpoint on.
    Second,
}

/// Format a number for a two-character box.
///
/// Single-digit values get a leading space, or a `+` when `signed` and
/// positive. Zero is always `" 0"`. Anything wider is left alone.
pub fn format_number(value: i32, signed: bool) -> String {
    let text = value.to_string();
    if text.len() > 1 {
        text
    } else if value == 0 || !signed {
        format!(" {text}")
    } else {
        format!("+{text}")
    }
}

/// Join one half of a list with `", "`, splitting at `len / 2`.
pub fn split_list(items: &[String], half: Half) -> String {
    let mid = items.len() / 2;
    let part = match half {
        Half::First => &items[..mid],
        Half::Second => &items[mid..],
    };
    part.join(", ")
}

/// Non-zero denominations, e.g. `GP:4 SP:14 CP:57`.
pub fn format_money(money: &Money) -> String {
    [("GP", money.gp), ("SP", money.sp), ("CP", money.cp)]
        .iter()
        .filter(|(_, n)| *n != 0)
        .map(|(label, n)| format!("{label}:{n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every slot of the character sheet, formatted.
///
/// Fields are named after the template slot ids (`strScore` is `str_score`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SheetFields {
    pub str_score: String,
    pub str_mod: String,
    pub agi_score: String,
    pub agi_mod: String,
    pub hit_points: String,
    pub armor_class: String,
    pub spd_score: String,
    pub sta_score: String,
    pub sta_mod: String,
    pub init_mod: String,
    pub int_score: String,
    pub int_mod: String,
    pub fort_mod: String,
    pub reflex_mod: String,
    pub will_mod: String,
    pub per_score: String,
    pub per_mod: String,
    pub luc_score: String,
    pub luc_mod: String,
    pub occupation: String,
    pub money: String,
    pub weapon1: String,
    pub weapon2: String,
    pub lucky_sign1: String,
    pub lucky_sign2: String,
    pub languages1: String,
    pub languages2: String,
    pub equipment1: String,
    pub equipment2: String,
    pub traits1: String,
    pub traits2: String,
}

impl SheetFields {
    /// Slot ids in template order.
    pub const SLOTS: [&'static str; 31] = [
        "strScore",
        "strMod",
        "agiScore",
        "agiMod",
        "hitPoints",
        "armorClass",
        "spdScore",
        "staScore",
        "staMod",
        "initMod",
        "intScore",
        "intMod",
        "fortMod",
        "reflexMod",
        "willMod",
        "perScore",
        "perMod",
        "lucScore",
        "lucMod",
        "occupation",
        "money",
        "weapon1",
        "weapon2",
        "luckySign1",
        "luckySign2",
        "languages1",
        "languages2",
        "equipment1",
        "equipment2",
        "traits1",
        "traits2",
    ];

    /// Format a character for the sheet.
    pub fn from_character(c: &Character) -> Self {
        let a = &c.abilities;
        let score = |s: u32| format_number(s as i32, false);
        let modifier = |m: i32| format_number(m, true);

        Self {
            str_score: score(a.strength.score),
            str_mod: modifier(a.strength.modifier),
            agi_score: score(a.agility.score),
            agi_mod: modifier(a.agility.modifier),
            hit_points: c.hit_points.to_string(),
            armor_class: c.armor_class.to_string(),
            spd_score: c.speed.clone(),
            sta_score: score(a.stamina.score),
            sta_mod: modifier(a.stamina.modifier),
            init_mod: modifier(c.initiative),
            int_score: score(a.intelligence.score),
            int_mod: modifier(a.intelligence.modifier),
            fort_mod: modifier(c.saving_throws.fortitude),
            reflex_mod: modifier(c.saving_throws.reflex),
            will_mod: modifier(c.saving_throws.willpower),
            per_score: score(a.personality.score),
            per_mod: modifier(a.personality.modifier),
            luc_score: score(a.luck.score),
            luc_mod: modifier(a.luck.modifier),
            occupation: c.occupation.clone(),
            money: format_money(&c.money),
            weapon1: format!("{} {}", c.trained_weapon, c.trained_weapon_damage),
            weapon2: c.trained_weapon_range.clone(),
            lucky_sign1: format!("{}:", c.lucky_sign.name),
            lucky_sign2: c.lucky_sign.description.clone(),
            languages1: split_list(&c.languages, Half::First),
            languages2: split_list(&c.languages, Half::Second),
            equipment1: split_list(&c.equipment, Half::First),
            equipment2: split_list(&c.equipment, Half::Second),
            traits1: split_list(&c.racial_traits, Half::First),
            traits2: split_list(&c.racial_traits, Half::Second),
        }
    }

    /// Slot id and value pairs, in [`SheetFields::SLOTS`] order.
    pub fn slots(&self) -> [(&'static str, &str); 31] {
        let values = [
            &self.str_score,
            &self.str_mod,
            &self.agi_score,
            &self.agi_mod,
            &self.hit_points,
            &self.armor_class,
            &self.spd_score,
            &self.sta_score,
            &self.sta_mod,
            &self.init_mod,
            &self.int_score,
            &self.int_mod,
            &self.fort_mod,
            &self.reflex_mod,
            &self.will_mod,
            &self.per_score,
            &self.per_mod,
            &self.luc_score,
            &self.luc_mod,
            &self.occupation,
            &self.money,
            &self.weapon1,
            &self.weapon2,
            &self.lucky_sign1,
            &self.lucky_sign2,
            &self.languages1,
            &self.languages2,
            &self.equipment1,
            &self.equipment2,
            &self.traits1,
            &self.traits2,
        ];
        std::array::from_fn(|i| (Self::SLOTS[i], values[i].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numbers_padded() {
        assert_eq!(format_number(7, false), " 7");
        assert_eq!(format_number(12, false), "12");
        assert_eq!(format_number(2, true), "+2");
        assert_eq!(format_number(0, true), " 0");
        assert_eq!(format_number(-1, true), "-1");
        assert_eq!(format_number(10, true), "10");
    }

    #[test]
    fn lists_split_at_midpoint() {
        let langs = strings(&["Common", "Elf", "Orc"]);
        assert_eq!(split_list(&langs, Half::First), "Common");
        assert_eq!(split_list(&langs, Half::Second), "Elf, Orc");
        let one = strings(&["Common"]);
        assert_eq!(split_list(&one, Half::First), "");
        assert_eq!(split_list(&one, Half::Second), "Common");
        assert_eq!(split_list(&[], Half::Second), "");
    }

    #[test]
    fn money_skips_zero_coins() {
        let money = Money {
            gp: 4,
            sp: 0,
            cp: 57,
        };
        assert_eq!(format_money(&money), "GP:4 CP:57");
        assert_eq!(format_money(&Money::default()), "");
    }

    #[test]
    fn slots_match_names() {
        let fields = SheetFields {
            str_score: "a".into(),
            str_mod: "b".into(),
            agi_score: String::new(),
            agi_mod: String::new(),
            hit_points: String::new(),
            armor_class: String::new(),
            spd_score: String::new(),
            sta_score: String::new(),
            sta_mod: String::new(),
            init_mod: String::new(),
            int_score: String::new(),
            int_mod: String::new(),
            fort_mod: String::new(),
            reflex_mod: String::new(),
            will_mod: String::new(),
            per_score: String::new(),
            per_mod: String::new(),
            luc_score: String::new(),
            luc_mod: String::new(),
            occupation: String::new(),
            money: String::new(),
            weapon1: String::new(),
            weapon2: String::new(),
            lucky_sign1: String::new(),
            lucky_sign2: String::new(),
            languages1: String::new(),
            languages2: String::new(),
            equipment1: String::new(),
            equipment2: String::new(),
            traits1: String::new(),
            traits2: "z".into(),
        };
        let slots = fields.slots();
        assert_eq!(slots[0], ("strScore", "a"));
        assert_eq!(slots[1], ("strMod", "b"));
        assert_eq!(slots[30], ("traits2", "z"));
        let json = serde_json::to_value(&fields).unwrap();
        for slot in SheetFields::SLOTS {
            assert!(json.get(slot).is_some(), "{slot}");
        }
    }
}
