pub mod generate;
pub mod tables;

use std::path::Path;

use funnel_core::RuleTables;

/// Load tables from `dir`, or the built-in set when no directory is given.
fn load_tables(dir: Option<&Path>) -> Result<RuleTables, String> {
    match dir {
        Some(dir) => {
            log::info!("loading rule tables from {}", dir.display());
            RuleTables::load_dir(dir).map_err(|e| e.to_string())
        }
        None => RuleTables::builtin().map_err(|e| format!("built-in tables are broken: {e}")),
    }
}
