//! Known languages.

use funnel_core::tables::{LanguageColumn, language};
use funnel_core::{Abilities, LuckEffect, LuckySign, Race, RuleTables};

use crate::dice::{DiceSource, Die};
use crate::error::{GenError, GenResult, RetryStep};

/// Languages known at zero level.
///
/// Everyone speaks Common. Intelligence 5 or less adds "Illiterate" and
/// nothing else; 6-7 stays at Common. Demi-humans above that also speak
/// their race's tongue, and every character rolls one bonus language per
/// point of intelligence modifier (plus luck, for Birdsong).
pub fn resolve_languages(
    tables: &RuleTables,
    abilities: &Abilities,
    sign: &LuckySign,
    race: Race,
    max_attempts: u32,
    dice: &mut dyn DiceSource,
) -> GenResult<Vec<String>> {
    let mut languages = vec!["Common".to_string()];
    let intelligence = abilities.intelligence.score;

    if intelligence <= 5 {
        languages.push("Illiterate".to_string());
        return Ok(languages);
    }
    if intelligence <= 7 {
        return Ok(languages);
    }
    if race.is_demi_human() {
        languages.push(race.to_string());
    }

    let bonus = abilities.intelligence.modifier
        + sign.bonus(LuckEffect::Languages, abilities.luck.modifier);
    let column = LanguageColumn::from(race);

    for _ in 0..bonus.max(0) {
        let learned = roll_new_language(tables, column, &languages, max_attempts, dice)?;
        languages.push(learned);
    }

    log::debug!("languages: {}", languages.join(", "));
    Ok(languages)
}

fn roll_new_language(
    tables: &RuleTables,
    column: LanguageColumn,
    known: &[String],
    max_attempts: u32,
    dice: &mut dyn DiceSource,
) -> GenResult<String> {
    for _ in 0..max_attempts {
        let roll = dice.roll(Die::D100, 1)?;
        let language = tables
            .languages
            .lookup(column, roll)
            .ok_or_else(|| GenError::missing(language::FILE, format!("{column} roll {roll}")))?;
        if !known.iter().any(|k| k == language) {
            return Ok(language.to_string());
        }
        log::trace!("already knows {language}, rerolling");
    }

    log::warn!("no new language after {max_attempts} attempts");
    Err(GenError::ExhaustedRetry {
        step: RetryStep::Language,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{MaxDice, ScriptedDice};
    use funnel_core::AbilityScore;

    fn tables() -> RuleTables {
        RuleTables::builtin().unwrap()
    }

    fn abilities(int_score: u32, int_mod: i32, luck_mod: i32) -> Abilities {
        let plain = AbilityScore {
            score: 10,
            modifier: 0,
        };
        Abilities {
            strength: plain,
            agility: plain,
            stamina: plain,
            intelligence: AbilityScore {
                score: int_score,
                modifier: int_mod,
            },
            personality: plain,
            luck: AbilityScore {
                score: 10,
                modifier: luck_mod,
            },
        }
    }

    fn plain_sign() -> LuckySign {
        LuckySign::from_line("Harsh winter: All attack rolls").unwrap()
    }

    #[test]
    fn low_intelligence_is_illiterate() {
        let langs = resolve_languages(
            &tables(),
            &abilities(5, -2, 0),
            &plain_sign(),
            Race::Elf,
            10,
            &mut MaxDice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common", "Illiterate"]);
    }

    #[test]
    fn dull_demi_human_only_speaks_common() {
        let langs = resolve_languages(
            &tables(),
            &abilities(7, -1, 0),
            &plain_sign(),
            Race::Dwarf,
            10,
            &mut MaxDice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common"]);
    }

    #[test]
    fn demi_human_adds_own_tongue() {
        let langs = resolve_languages(
            &tables(),
            &abilities(10, 0, 0),
            &plain_sign(),
            Race::Halfling,
            10,
            &mut MaxDice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common", "Halfling"]);
    }

    #[test]
    fn bonus_languages_skip_known() {
        // Dwarf column: 100 -> Giant, 100 again (known) -> reroll, 1 -> Alignment tongue.
        let mut dice = ScriptedDice::new([100, 100, 1]);
        let langs = resolve_languages(
            &tables(),
            &abilities(16, 2, 0),
            &plain_sign(),
            Race::Dwarf,
            10,
            &mut dice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common", "Dwarf", "Giant", "Alignment tongue"]);
        assert_eq!(dice.drawn(), 3);
    }

    #[test]
    fn birdsong_adds_luck() {
        let sign = LuckySign::from_line("Birdsong: Number of languages").unwrap();
        let mut dice = ScriptedDice::new([50]);
        let langs = resolve_languages(
            &tables(),
            &abilities(10, 0, 1),
            &sign,
            Race::Human,
            10,
            &mut dice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common", "Halfling"]);
    }

    #[test]
    fn negative_bonus_adds_nothing() {
        let sign = LuckySign::from_line("Birdsong: Number of languages").unwrap();
        let langs = resolve_languages(
            &tables(),
            &abilities(13, 1, -3),
            &sign,
            Race::Human,
            10,
            &mut MaxDice,
        )
        .unwrap();
        assert_eq!(langs, vec!["Common"]);
    }

    #[test]
    fn repeated_rolls_exhaust() {
        let err = resolve_languages(
            &tables(),
            &abilities(18, 3, 0),
            &plain_sign(),
            Race::Human,
            5,
            &mut MaxDice,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GenError::ExhaustedRetry {
                step: RetryStep::Language,
                attempts: 5
            }
        ));
    }
}
