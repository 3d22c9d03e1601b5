//! Catalog command - admin listing and maintenance
//!
//! Every process starts as the public role, so both subcommands go
//! through a credential prompt before touching the gated operations.

use crate::cli::args::{CatalogAction, CatalogArgs};
use crate::config::Config;
use crate::error::TillResult;
use crate::money;
use crate::register::Register;
use crate::ui::{self, UiContext};
use console::style;
use std::path::PathBuf;

/// Execute the catalog command
pub fn execute(args: CatalogArgs, config: &Config, data_file: PathBuf) -> TillResult<()> {
    let ctx = UiContext::detect();
    let mut register = Register::open(data_file);

    authenticate(&ctx, &mut register)?;

    match args.action {
        CatalogAction::List => list(&ctx, config, &register),
        CatalogAction::Add { name, price } => add(&ctx, config, &mut register, &name, &price),
    }
}

/// Admin login prompt. Without a terminal the session stays public and
/// the gated operation below reports access denied.
fn authenticate(ctx: &UiContext, register: &mut Register) -> TillResult<()> {
    if !ctx.is_interactive() {
        return Ok(());
    }
    ui::init_theme();
    let username = ui::input(ctx, "Username", None, None)?;
    let password = ui::password(ctx, "Password")?;
    register.login(&username, &password)
}

fn list(ctx: &UiContext, config: &Config, register: &Register) -> TillResult<()> {
    let entries = register.price_list()?;

    if entries.is_empty() {
        ui::step_info(ctx, "Catalog is empty.");
        return Ok(());
    }

    println!(
        "{:<30} {:>14}",
        style("NAME").bold(),
        style("PRICE").bold()
    );
    println!("{}", "-".repeat(45));
    for (name, price) in &entries {
        println!(
            "{:<30} {:>14}",
            name,
            money::format_amount(&config.currency.prefix, *price)
        );
    }
    println!();
    println!("{} item(s)", entries.len());
    Ok(())
}

fn add(
    ctx: &UiContext,
    config: &Config,
    register: &mut Register,
    name: &str,
    price: &str,
) -> TillResult<()> {
    let (name, price) = register.upsert_item(name, price)?;
    ui::step_ok_detail(
        ctx,
        &format!("'{}' saved", name),
        &money::format_amount(&config.currency.prefix, price),
    );
    Ok(())
}
