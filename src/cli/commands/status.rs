//! Status command - configuration and data file health

use crate::config::{Config, ConfigManager};
use crate::error::TillResult;
use console::{style, Emoji};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub fn execute(manager: &ConfigManager, config: &Config, data_file: &Path) -> TillResult<()> {
    println!("{}", style("Till Status").bold().green());
    println!();

    println!("{}", style("Configuration:").bold());
    let config_path = manager.path();
    if config_path.exists() {
        println!("  {} {}", CHECK, config_path.display());
    } else {
        println!(
            "  {} {} (not found, defaults in use)",
            WARN,
            config_path.display()
        );
    }
    println!("  {} Currency prefix: {}", CHECK, config.currency.prefix);

    println!();
    println!("{}", style("Catalog:").bold());
    println!("  {} Data file: {}", CHECK, data_file.display());
    match fs::read_to_string(data_file) {
        Ok(content) => match serde_json::from_str::<BTreeMap<String, u64>>(&content) {
            Ok(items) => println!("  {} Parses cleanly: {} item(s)", CHECK, items.len()),
            Err(e) => {
                println!("  {} Not a valid catalog: {}", CROSS, style(e).red());
                println!("  {} Startup will fall back to an empty catalog", WARN);
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("  {} Not created yet (written on first save)", WARN);
        }
        Err(e) => {
            println!("  {} Unreadable: {}", CROSS, style(e).red());
            println!("  {} Startup will fall back to an empty catalog", WARN);
        }
    }

    Ok(())
}
