//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{TillError, TillResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the config command
pub fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> TillResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config),
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value)?,
    }
    Ok(())
}

fn show_config(config: &Config) {
    let toml =
        toml::to_string_pretty(config).unwrap_or_else(|_| "Error serializing config".to_string());
    println!("{}", toml);
}

fn set_value(manager: &ConfigManager, config: &Config, key: &str, value: &str) -> TillResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    // Parse dot-separated key path
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => {
            if value != "text" && value != "json" {
                return Err(TillError::User(format!(
                    "log_format must be 'text' or 'json', got '{}'",
                    value
                )));
            }
            config.general.log_format = value.to_string();
        }
        ["storage", "data_file"] => config.storage.data_file = Some(PathBuf::from(value)),
        ["currency", "prefix"] => config.currency.prefix = value.to_string(),
        _ => {
            return Err(TillError::User(format!(
                "Unknown configuration key: {}",
                key
            )))
        }
    }

    manager.save(&config)?;
    ui::step_ok_detail(&ctx, &format!("Set {}", key), value);
    Ok(())
}
