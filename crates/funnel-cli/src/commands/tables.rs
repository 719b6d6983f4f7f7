use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use funnel_core::{Race, RuleTables};

pub fn init(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    RuleTables::write_builtin(dir).map_err(|e| e.to_string())?;

    println!("Created rule tables in {}/", dir.display());
    for name in RuleTables::file_names() {
        println!("  {name}");
    }
    println!();
    println!("Edit the files, then:");
    println!("  funnel tables check {}", dir.display());
    println!("  funnel generate --tables {}", dir.display());

    Ok(())
}

pub fn check(dir: &Path) -> Result<(), String> {
    let tables = RuleTables::load_dir(dir).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries"]);
    table.add_row(vec![
        "Ability score modifiers".to_string(),
        tables.ability_modifiers.len().to_string(),
    ]);
    table.add_row(vec![
        "Lucky signs".to_string(),
        tables.lucky_signs.len().to_string(),
    ]);
    for race in Race::all() {
        table.add_row(vec![
            format!("{race} occupations"),
            tables.occupations(*race).entries().len().to_string(),
        ]);
    }
    table.add_row(vec![
        "Languages".to_string(),
        tables.languages.rows().len().to_string(),
    ]);
    for (name, list) in [
        ("Farmer types", &tables.farmer_types),
        ("Animal types", &tables.animal_types),
        ("Cart contents", &tables.cart_contents),
        ("Equipment", &tables.equipment),
    ] {
        table.add_row(vec![name.to_string(), list.len().to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} All checks passed", "OK".green().bold());

    Ok(())
}

pub fn show(dir: Option<&Path>, race: Option<&str>) -> Result<(), String> {
    let tables = super::load_tables(dir)?;

    let races: Vec<Race> = match race {
        Some(name) => vec![Race::parse(name).ok_or_else(|| {
            format!("unknown race: \"{name}\". Use: human, dwarf, elf, halfling")
        })?],
        None => Race::all().to_vec(),
    };

    for race in races {
        println!(
            "  {} {}",
            format!("{race} occupations").bold().underline(),
            format!("(d{})", race.occupation_range()).dimmed()
        );
        println!();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Roll", "Occupation", "Trained weapon", "Trade goods"]);
        for (lo, hi, entry) in tables.occupations(race).ranges() {
            let roll = if lo == hi {
                lo.to_string()
            } else {
                format!("{lo}-{hi}")
            };
            let goods = if entry.trade_goods.is_empty() {
                "-".to_string()
            } else {
                entry.trade_goods.clone()
            };
            table.add_row(vec![
                roll,
                entry.occupation.clone(),
                entry.trained_weapon.clone(),
                goods,
            ]);
        }

        println!("{table}");
        println!();
    }

    Ok(())
}
