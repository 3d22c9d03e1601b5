//! Terminal UI for the register
//!
//! Uses `cliclack` for interactive prompts with a plain-output fallback
//! in CI and other non-interactive environments. This layer owns all
//! rendering; core types never print.

mod context;
mod output;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, note, outro_success, remark, step_error, step_info, step_ok, step_ok_detail,
    step_warn,
};
pub use prompts::{confirm, input, password, select};
pub use theme::{init_theme, TillTheme};
