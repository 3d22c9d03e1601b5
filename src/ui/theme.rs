//! Custom theme for cliclack prompts

use cliclack::ThemeState;
use console::Style;

/// Green-accented register theme
#[derive(Debug, Clone, Default)]
pub struct TillTheme;

impl cliclack::Theme for TillTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().green(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().green().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            _ => Style::new().green(),
        }
    }
}

/// Initialize the global theme
pub fn init_theme() {
    cliclack::set_theme(TillTheme);
}
