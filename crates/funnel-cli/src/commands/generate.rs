use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use funnel_core::{Character, RaceExclusions};
use funnel_mechanics::{Generator, GeneratorConfig, RngDice};
use funnel_sheet::{SheetTemplate, render_json, render_markdown, render_svg_pages, render_text};

pub struct GenerateOptions {
    pub count: usize,
    pub seed: Option<u64>,
    pub test_suitability: bool,
    pub exclusions: RaceExclusions,
    pub format: String,
    pub output: Option<PathBuf>,
    pub tables: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

pub fn run(opts: &GenerateOptions) -> Result<(), String> {
    if opts.count == 0 {
        return Err("count must be at least 1".into());
    }
    let extension = match opts.format.as_str() {
        "text" | "txt" => "txt",
        "markdown" | "md" => "md",
        "json" => "json",
        "svg" => "svg",
        other => {
            return Err(format!(
                "unsupported format: \"{other}\". Use: text, markdown, json, svg"
            ));
        }
    };

    let tables = super::load_tables(opts.tables.as_deref())?;
    let template = match &opts.template {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            SheetTemplate::parse(&text).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => SheetTemplate::builtin(),
    };

    let seed = opts.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");
    if opts.exclusions.excludes_all() {
        log::warn!("every race is excluded; generating from all races");
    }

    let config = GeneratorConfig::default()
        .with_suitability(opts.test_suitability)
        .with_exclusions(opts.exclusions);
    let mut party = Vec::with_capacity(opts.count);
    for (i, result) in Generator::new(&tables, config)
        .generate_many(opts.count, &mut RngDice::seeded(seed))
        .into_iter()
        .enumerate()
    {
        match result {
            Ok(character) => party.push(character),
            Err(e) => eprintln!("  {} character {}: {e}", "SKIP".yellow().bold(), i + 1),
        }
    }
    if party.is_empty() {
        return Err(format!("generation failed for all {} characters", opts.count));
    }

    let documents = match extension {
        "txt" => {
            if opts.output.is_none() {
                print_summary(&party, seed);
            }
            vec![render_text(&party)]
        }
        "md" => vec![render_markdown(&party)],
        "json" => vec![render_json(&party).map_err(|e| e.to_string())?],
        _ => render_svg_pages(&template, &party).map_err(|e| e.to_string())?,
    };

    match &opts.output {
        Some(out) => {
            let base = output_base(out, extension);
            let total = documents.len();
            for (i, doc) in documents.iter().enumerate() {
                let path = page_path(&base, i, total);
                std::fs::write(&path, doc)
                    .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
                println!("  Wrote {}", path.display());
            }
            println!(
                "  {} characters {}",
                party.len(),
                format!("(seed={seed})").dimmed()
            );
        }
        None => {
            if extension != "txt" {
                eprintln!("seed: {seed}");
            }
            for doc in &documents {
                print!("{doc}");
            }
        }
    }

    Ok(())
}

/// The file to write: `out` itself, or a timestamped file inside it when
/// `out` is a directory.
fn output_base(out: &Path, extension: &str) -> PathBuf {
    if out.is_dir() {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        out.join(format!("{stamp}.{extension}"))
    } else {
        out.to_path_buf()
    }
}

/// `base` for a single document; `stem-N.ext` for page N of several.
fn page_path(base: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}-{}.{}", index + 1, ext.to_string_lossy()),
        None => format!("{stem}-{}", index + 1),
    };
    base.with_file_name(name)
}

fn print_summary(party: &[Character], seed: u64) {
    println!(
        "  {} {}",
        "Funnel".bold(),
        format!("({} characters, seed={seed})", party.len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#", "Race", "Occupation", "Str", "Agi", "Sta", "Per", "Int", "Luck", "HP", "AC", "Weapon",
    ]);

    for (i, c) in party.iter().enumerate() {
        let a = &c.abilities;
        let mut row = vec![(i + 1).to_string(), c.race.to_string(), c.occupation.clone()];
        for score in [
            a.strength,
            a.agility,
            a.stamina,
            a.personality,
            a.intelligence,
            a.luck,
        ] {
            row.push(format!("{} ({:+})", score.score, score.modifier));
        }
        row.push(c.hit_points.to_string());
        row.push(c.armor_class.to_string());
        row.push(c.trained_weapon.clone());
        table.add_row(row);
    }

    println!("{table}");
    println!();

    let unsuitable = party.iter().filter(|c| !c.suitable).count();
    if unsuitable > 0 {
        println!(
            "  {} {unsuitable} characters have a negative modifier sum",
            "NOTE".yellow().bold()
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_keeps_name() {
        let base = Path::new("/tmp/party.svg");
        assert_eq!(page_path(base, 0, 1), PathBuf::from("/tmp/party.svg"));
    }

    #[test]
    fn pages_get_numbered() {
        let base = Path::new("/tmp/party.svg");
        assert_eq!(page_path(base, 0, 3), PathBuf::from("/tmp/party-1.svg"));
        assert_eq!(page_path(base, 2, 3), PathBuf::from("/tmp/party-3.svg"));
    }
}
