//! CLI frontend for the Funnel zero-level character generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "funnel",
    about = "Funnel: zero-level character generator for Dungeon Crawl Classics",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log each generation step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a party of zero-level characters
    Generate {
        /// Number of characters (default: 4, one page)
        #[arg(short = 'n', long, default_value = "4")]
        count: usize,

        /// RNG seed for a reproducible party (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Keep characters whose modifiers sum below zero
        #[arg(long)]
        no_suitability: bool,

        /// Never generate humans
        #[arg(long)]
        no_human: bool,

        /// Never generate dwarves
        #[arg(long)]
        no_dwarf: bool,

        /// Never generate elves
        #[arg(long)]
        no_elf: bool,

        /// Never generate halflings
        #[arg(long)]
        no_halfling: bool,

        /// Output format: text, markdown, json, svg
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory of rule table files (default: built-in tables)
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// SVG sheet template (default: built-in sheet)
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Work with rule table files
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// Write the built-in rule tables to a new directory
    Init {
        /// Directory to create
        dir: PathBuf,
    },

    /// Load and validate a directory of rule tables
    Check {
        /// Directory containing the table files
        dir: PathBuf,
    },

    /// Print the occupation tables with their roll ranges
    Show {
        /// Only this race (human, dwarf, elf, halfling)
        race: Option<String>,

        /// Directory of rule table files (default: built-in tables)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Generate {
            count,
            seed,
            no_suitability,
            no_human,
            no_dwarf,
            no_elf,
            no_halfling,
            format,
            output,
            tables,
            template,
        } => commands::generate::run(&commands::generate::GenerateOptions {
            count,
            seed,
            test_suitability: !no_suitability,
            exclusions: funnel_core::RaceExclusions {
                human: no_human,
                dwarf: no_dwarf,
                elf: no_elf,
                halfling: no_halfling,
            },
            format,
            output,
            tables,
            template,
        }),
        Commands::Tables { action } => match action {
            TablesAction::Init { dir } => commands::tables::init(&dir),
            TablesAction::Check { dir } => commands::tables::check(&dir),
            TablesAction::Show { race, tables } => {
                commands::tables::show(tables.as_deref(), race.as_deref())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
