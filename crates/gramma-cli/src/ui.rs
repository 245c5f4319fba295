use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stderr().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet && flags.format != OutputFormat::Json,
        ProgressMode::Off => false,
        ProgressMode::Auto => is_tty && !flags.quiet && flags.format != OutputFormat::Json,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            color: ColorMode::Auto,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn no_spinner_without_tty() {
        assert!(!resolve(&flags(OutputFormat::Table, false), false).progress);
    }

    #[test]
    fn no_spinner_for_json_or_quiet() {
        assert!(!resolve(&flags(OutputFormat::Json, false), true).progress);
        assert!(!resolve(&flags(OutputFormat::Table, true), true).progress);
        assert!(resolve(&flags(OutputFormat::Table, false), true).progress);
    }

    #[test]
    fn never_color_wins() {
        let mut f = flags(OutputFormat::Table, false);
        f.color = ColorMode::Never;
        assert!(!resolve(&f, true).table_color);
    }
}
