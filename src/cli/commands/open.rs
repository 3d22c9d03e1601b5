//! Open command - the interactive register shell
//!
//! One prompt loop per operator action. Every failure is reported and
//! the loop continues; the process only exits when the operator closes
//! the register.

use crate::catalog::Suggestions;
use crate::config::Config;
use crate::error::{TillError, TillResult};
use crate::money;
use crate::register::Register;
use crate::session::Role;
use crate::ui::{self, UiContext};
use console::style;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Scan,
    ViewCart,
    RemoveLast,
    Checkout,
    NewTransaction,
    AddItem,
    PriceList,
    Login,
    Logout,
    Exit,
}

/// Execute the open command
pub fn execute(config: &Config, data_file: PathBuf) -> TillResult<()> {
    let ctx = UiContext::detect();
    if !ctx.is_interactive() {
        return Err(TillError::NotInteractive(
            "the register needs an operator terminal",
        ));
    }

    ui::init_theme();
    let mut register = Register::open(data_file);
    info!("register opened with {} catalog items", register.catalog_len());

    ui::intro(&ctx, "Till register");

    loop {
        let action = match main_menu(&ctx, &register) {
            Ok(action) => action,
            Err(e) => {
                report(&ctx, &e);
                continue;
            }
        };

        let result = match action {
            MenuAction::Scan => scan_item(&ctx, config, &mut register),
            MenuAction::ViewCart => {
                show_cart(config, &register);
                Ok(())
            }
            MenuAction::RemoveLast => remove_last(&ctx, config, &mut register),
            MenuAction::Checkout => checkout(&ctx, config, &mut register),
            MenuAction::NewTransaction => {
                register.new_transaction();
                ui::step_info(&ctx, "New transaction started.");
                Ok(())
            }
            MenuAction::AddItem => add_item(&ctx, config, &mut register),
            MenuAction::PriceList => price_list(config, &register),
            MenuAction::Login => login(&ctx, &mut register),
            MenuAction::Logout => {
                register.logout();
                ui::step_info(&ctx, "Back to cashier mode.");
                Ok(())
            }
            MenuAction::Exit => break,
        };

        if let Err(e) = result {
            report(&ctx, &e);
        }
    }

    ui::outro_success(&ctx, "Register closed");
    Ok(())
}

/// Failures stay inside the loop: validation problems are warnings,
/// cancelled prompts just a remark, everything else an error step.
fn report(ctx: &UiContext, err: &TillError) {
    match err {
        TillError::Prompt(_) => ui::remark(ctx, "Cancelled."),
        e if e.is_validation() => ui::step_warn(ctx, &e.to_string()),
        e => {
            ui::step_error(ctx, &e.to_string());
            if let Some(hint) = e.hint() {
                ui::remark(ctx, hint);
            }
        }
    }
}

fn main_menu(ctx: &UiContext, register: &Register) -> TillResult<MenuAction> {
    let mode = match register.role() {
        Role::Admin => "admin",
        Role::Public => "cashier",
    };
    let message = format!(
        "{} mode, {} item(s) in cart",
        mode,
        register.lines().len()
    );

    let mut options: Vec<(MenuAction, String, String)> = vec![
        (
            MenuAction::Scan,
            "Scan item".to_string(),
            "search the catalog, add to cart".to_string(),
        ),
        (MenuAction::ViewCart, "View cart".to_string(), String::new()),
        (
            MenuAction::RemoveLast,
            "Remove last item".to_string(),
            String::new(),
        ),
        (
            MenuAction::Checkout,
            "Checkout".to_string(),
            "take payment, compute change".to_string(),
        ),
        (
            MenuAction::NewTransaction,
            "New transaction".to_string(),
            "clear the cart".to_string(),
        ),
    ];

    if register.is_admin() {
        options.push((
            MenuAction::AddItem,
            "Add or update item".to_string(),
            "catalog maintenance".to_string(),
        ));
        options.push((
            MenuAction::PriceList,
            "Price list".to_string(),
            "full catalog".to_string(),
        ));
        options.push((
            MenuAction::Logout,
            "Logout".to_string(),
            String::new(),
        ));
    } else {
        options.push((MenuAction::Login, "Admin login".to_string(), String::new()));
    }
    options.push((MenuAction::Exit, "Close register".to_string(), String::new()));

    ui::select(ctx, &message, options)
}

fn scan_item(ctx: &UiContext, config: &Config, register: &mut Register) -> TillResult<()> {
    let query = ui::input(ctx, "Item name", Some("start typing to search"), Some(""))?;

    let name = match register.suggest(&query) {
        Suggestions::Prompt => {
            ui::step_info(ctx, "Type an item name to search the catalog.");
            return Ok(());
        }
        Suggestions::NoMatch => {
            ui::step_warn(ctx, &format!("No catalog items match '{}'.", query.trim()));
            if !ui::confirm(
                ctx,
                &format!("Add '{}' to the cart anyway?", query.trim()),
                false,
            )? {
                return Ok(());
            }
            query.trim().to_string()
        }
        Suggestions::Matches(names) => pick_suggestion(ctx, &query, names)?,
    };

    let qty_text = ui::input(ctx, &format!("Quantity of {}", name), None, Some("1"))?;
    let quantity = register.add_to_cart(&name, &qty_text)?;
    ui::step_ok(ctx, &format!("'{}' ({}x) added.", name, quantity));
    show_cart(config, register);
    Ok(())
}

fn pick_suggestion(ctx: &UiContext, query: &str, names: Vec<String>) -> TillResult<String> {
    let typed = query.trim().to_string();
    let mut options: Vec<(String, String, String)> = names
        .iter()
        .map(|name| (name.clone(), name.clone(), String::new()))
        .collect();
    if !names.contains(&typed) {
        options.push((
            typed.clone(),
            format!("Use '{}' as typed", typed),
            "not in the catalog".to_string(),
        ));
    }
    ui::select(ctx, "Which item?", options)
}

fn show_cart(config: &Config, register: &Register) {
    let prefix = &config.currency.prefix;
    println!();
    if register.lines().is_empty() {
        println!("  (cart empty)");
    } else {
        for (i, line) in register.lines().iter().enumerate() {
            let name: String = line.name.chars().take(20).collect();
            println!(
                "  {:>2}. {:<20} ({}x) | {}",
                i + 1,
                name,
                line.quantity,
                money::format_amount(prefix, line.subtotal)
            );
        }
    }
    println!(
        "  {}",
        style(format!(
            "TOTAL: {}",
            money::format_amount(prefix, register.total())
        ))
        .bold()
    );
    println!();
}

fn remove_last(ctx: &UiContext, config: &Config, register: &mut Register) -> TillResult<()> {
    let line = register.remove_last()?;
    ui::step_info(ctx, &format!("'{}' removed from the cart.", line.name));
    show_cart(config, register);
    Ok(())
}

fn checkout(ctx: &UiContext, config: &Config, register: &mut Register) -> TillResult<()> {
    if register.total() == 0 {
        return Err(TillError::EmptyCart);
    }

    let prefix = &config.currency.prefix;
    ui::key_value(
        ctx,
        "Total due",
        &money::format_amount(prefix, register.total()),
    );
    let cash_text = ui::input(ctx, "Cash tendered", Some("grouping dots are fine"), None)?;
    let receipt = register.checkout(&cash_text)?;

    ui::note(
        ctx,
        "Transaction complete",
        &format!(
            "Total:    {}\nTendered: {}\nChange:   {}",
            money::format_amount(prefix, receipt.total),
            money::format_amount(prefix, receipt.tendered),
            money::format_amount(prefix, receipt.change),
        ),
    );

    if ui::confirm(ctx, "Start a new transaction?", true)? {
        register.new_transaction();
        ui::step_info(ctx, "New transaction started.");
    }
    Ok(())
}

fn add_item(ctx: &UiContext, config: &Config, register: &mut Register) -> TillResult<()> {
    let name = ui::input(ctx, "Item name", None, None)?;
    let price_text = ui::input(ctx, "Unit price", Some("smallest currency unit"), None)?;
    let (name, price) = register.upsert_item(&name, &price_text)?;
    ui::step_ok(
        ctx,
        &format!(
            "'{}' saved at {}.",
            name,
            money::format_amount(&config.currency.prefix, price)
        ),
    );
    Ok(())
}

fn price_list(config: &Config, register: &Register) -> TillResult<()> {
    let entries = register.price_list()?;
    println!();
    println!("  {}", style("PRICE LIST").bold());
    if entries.is_empty() {
        println!("  (catalog empty)");
    }
    for (name, price) in &entries {
        println!(
            "  {:<30} : {}",
            name,
            money::format_amount(&config.currency.prefix, *price)
        );
    }
    println!();
    Ok(())
}

fn login(ctx: &UiContext, register: &mut Register) -> TillResult<()> {
    let username = ui::input(ctx, "Username", None, None)?;
    let password = ui::password(ctx, "Password")?;
    register.login(&username, &password)?;
    ui::step_ok(ctx, "Admin mode enabled.");
    Ok(())
}
