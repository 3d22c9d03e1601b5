//! Till - single-register point-of-sale
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use till::cli::{Cli, Commands};
use till::config::ConfigManager;
use till::error::TillResult;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> TillResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Init rewrites the config file itself, so it must work even when
    // the current file does not load
    if let Commands::Init(args) = cli.command {
        return till::cli::commands::init(&config_manager, args);
    }

    let config = config_manager.load()?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("till=warn"),
        1 => EnvFilter::new("till=info"),
        _ => EnvFilter::new("till=debug"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }

    let data_file = ConfigManager::data_file(&config, cli.data.as_deref());

    match cli.command {
        Commands::Init(_) => unreachable!("Init handled above"),
        Commands::Open => till::cli::commands::open(&config, data_file),
        Commands::Catalog(args) => till::cli::commands::catalog(args, &config, data_file),
        Commands::Status => till::cli::commands::status(&config_manager, &config, &data_file),
        Commands::Config(args) => till::cli::commands::config(args, &config_manager, &config),
    }
}
