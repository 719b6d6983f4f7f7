//! Plain text, Markdown, and JSON renderings of a party.

use funnel_core::{Ability, Character};

use crate::error::SheetResult;

/// Labelled dump of every character, separated by blank lines.
pub fn render_text(party: &[Character]) -> String {
    let mut out = String::new();
    for (i, c) in party.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&c.to_string());
    }
    out.push('\n');
    out
}

/// A Markdown document with one section per character.
pub fn render_markdown(party: &[Character]) -> String {
    let mut out = String::new();

    out.push_str("# Funnel\n\n");

    for (i, c) in party.iter().enumerate() {
        out.push_str(&format!("## {}. {} ({})\n\n", i + 1, c.occupation, c.race));

        out.push_str("| Ability | Score | Modifier |\n");
        out.push_str("|---------|------:|---------:|\n");
        for ability in Ability::ALL {
            let a = c.abilities.get(ability);
            out.push_str(&format!("| {ability} | {} | {:+} |\n", a.score, a.modifier));
        }
        out.push('\n');

        let saves = &c.saving_throws;
        out.push_str(&format!(
            "- **Lucky sign:** {} ({:+})\n",
            c.lucky_sign, c.abilities.luck.modifier
        ));
        out.push_str(&format!(
            "- **Saves:** Reflex {:+}, Fortitude {:+}, Willpower {:+}\n",
            saves.reflex, saves.fortitude, saves.willpower
        ));
        out.push_str(&format!(
            "- **HP** {} / **AC** {} / **Init** {:+} / **Speed** {}\n",
            c.hit_points, c.armor_class, c.initiative, c.speed
        ));
        out.push_str(&format!(
            "- **Weapon:** {} ({}, {})\n",
            c.trained_weapon, c.trained_weapon_damage, c.trained_weapon_range
        ));
        if !c.racial_traits.is_empty() {
            out.push_str(&format!("- **Traits:** {}\n", c.racial_traits.join(", ")));
        }
        out.push_str(&format!("- **Languages:** {}\n", c.languages.join(", ")));
        out.push_str(&format!("- **Money:** {}\n", c.money));
        out.push_str(&format!("- **Equipment:** {}\n", c.equipment.join(", ")));
        out.push('\n');
    }

    out
}

/// Pretty-printed JSON array of characters.
pub fn render_json(party: &[Character]) -> SheetResult<String> {
    Ok(serde_json::to_string_pretty(party)?)
}
