//! Interactive prompts with non-interactive fallback
//!
//! Text and credential entry require a terminal; confirmation and
//! selection degrade to their defaults so read-only flows still work
//! in CI.

use super::context::UiContext;
use crate::error::{TillError, TillResult};

/// Prompt for confirmation, returns default if non-interactive
pub fn confirm(ctx: &UiContext, message: &str, default: bool) -> TillResult<bool> {
    if !ctx.is_interactive() {
        return Ok(default);
    }
    cliclack::confirm(message)
        .initial_value(default)
        .interact()
        .map_err(prompt_err)
}

/// Prompt for selection from a list of (value, label, hint) options.
/// Returns the first option if non-interactive.
pub fn select<T: Clone + Eq>(
    ctx: &UiContext,
    message: &str,
    options: Vec<(T, String, String)>,
) -> TillResult<T> {
    if !ctx.is_interactive() {
        return options
            .into_iter()
            .next()
            .map(|(value, _, _)| value)
            .ok_or_else(|| TillError::Prompt("empty selection".to_string()));
    }

    let mut select = cliclack::select(message);
    for (value, label, hint) in options {
        select = select.item(value, label, hint);
    }
    select.interact().map_err(prompt_err)
}

/// Prompt for a line of text
pub fn input(
    ctx: &UiContext,
    message: &str,
    placeholder: Option<&str>,
    default: Option<&str>,
) -> TillResult<String> {
    if !ctx.is_interactive() {
        return Err(TillError::NotInteractive("text entry needs a terminal"));
    }

    let mut input = cliclack::input(message);
    if let Some(placeholder) = placeholder {
        input = input.placeholder(placeholder);
    }
    if let Some(default) = default {
        input = input.default_input(default);
    }
    let value: String = input.interact().map_err(prompt_err)?;
    Ok(value)
}

/// Prompt for a masked credential
pub fn password(ctx: &UiContext, message: &str) -> TillResult<String> {
    if !ctx.is_interactive() {
        return Err(TillError::NotInteractive(
            "credential entry needs a terminal",
        ));
    }
    cliclack::password(message)
        .mask('*')
        .interact()
        .map_err(prompt_err)
}

fn prompt_err(e: std::io::Error) -> TillError {
    TillError::Prompt(e.to_string())
}
