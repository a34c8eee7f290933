//! Styles for the fetch spinner.

use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// One style per spinner state. Nothing styled here ever reaches stdout.
#[derive(Debug, Clone)]
pub struct Theme {
    pub fetching: Style,
    pub done: Style,
    pub failed: Style,
}

impl Theme {
    /// Color only when stderr accepts it (terminal, `NO_COLOR`/`CLICOLOR` unset).
    pub fn detect() -> Self {
        Self::for_stderr(console::colors_enabled_stderr())
    }

    pub fn for_stderr(colors: bool) -> Self {
        if !colors {
            return Self {
                fetching: Style::new(),
                done: Style::new(),
                failed: Style::new(),
            };
        }
        Self {
            fetching: Style::new().dimmed(),
            done: Style::new().green().bold(),
            failed: Style::new().red().bold(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_leaves_text_untouched() {
        let theme = Theme::for_stderr(false);
        assert_eq!("Counted 3 letters".style(theme.done).to_string(), "Counted 3 letters");
        assert_eq!("Failed".style(theme.failed).to_string(), "Failed");
    }

    #[test]
    fn test_colored_theme_adds_escapes() {
        let theme = Theme::for_stderr(true);
        let styled = "Failed".style(theme.failed).to_string();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("Failed"));
    }
}
