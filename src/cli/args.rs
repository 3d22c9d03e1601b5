//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Till - single-register point-of-sale
///
/// Keeps a small item catalog in one JSON file, builds a cart for the
/// current transaction, and computes totals and change.
#[derive(Parser, Debug)]
#[command(name = "till")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog data file path
    #[arg(short, long, global = true, env = "TILL_DATA")]
    pub data: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive register
    Open,

    /// Inspect or edit the item catalog (admin)
    Catalog(CatalogArgs),

    /// Check configuration and data file health
    Status,

    /// Write a default configuration file
    Init(InitArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Subcommand for catalog
    #[command(subcommand)]
    pub action: CatalogAction,
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List every item with its price
    List,

    /// Add an item or update its price
    Add {
        /// Item name (title-cased on save)
        name: String,

        /// Unit price in the smallest currency unit; grouping dots or
        /// commas are allowed
        price: String,
    },
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., currency.prefix)
        key: String,
        /// Value to set
        value: String,
    },
}
