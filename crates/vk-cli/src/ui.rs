//! Process-wide display preferences, resolved once from the global flags and
//! the terminal the binary runs in.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored; tables render at natural width.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UiPrefs {
    /// Colour the Type column of item tables.
    pub table_color: bool,
    /// Drop success and info notices.
    pub quiet: bool,
    pub term_width: Option<usize>,
}

/// Facts about the environment that feed [`UiPrefs`].
#[derive(Clone, Debug, Default)]
struct Terminal {
    stdout_is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        let is_table = flags.format == OutputFormat::Table;
        let table_color = is_table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => terminal.stdout_is_tty && !terminal.no_color && !flags.quiet,
            };

        Self {
            table_color,
            quiet: flags.quiet,
            term_width: terminal.columns.as_deref().and_then(parse_width),
        }
    }
}

fn parse_width(columns: &str) -> Option<usize> {
    columns
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width >= MIN_TERM_WIDTH)
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Resolve preferences for this process. Later calls are ignored.
pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs::resolve(flags, &Terminal::detect());
    tracing::debug!(?prefs, "resolved display preferences");
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
