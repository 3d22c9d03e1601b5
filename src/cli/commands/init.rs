//! Init command - write a default configuration file

use crate::cli::args::InitArgs;
use crate::config::ConfigManager;
use crate::error::{TillError, TillResult};
use crate::ui::{self, UiContext};
use std::fs;

/// Template for the configuration file
const INIT_TEMPLATE: &str = r#"# Till configuration
# Override this file's location with --config or TILL_CONFIG.

[general]
# log_format = "text"          # text or json

[storage]
# data_file = "catalog.json"   # defaults to the platform data dir

[currency]
# prefix = "Rp"
"#;

/// Execute the init command
pub fn execute(manager: &ConfigManager, args: InitArgs) -> TillResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !args.force {
        return Err(TillError::User(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TillError::DirCreate {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, INIT_TEMPLATE)
        .map_err(|e| TillError::io(format!("writing {}", path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );
    Ok(())
}
