use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal presentation settings resolved once per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub quiet: bool,
    pub term_width: Option<usize>,
}

/// What the process knows about its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, term: Terminal) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => term.stdout_tty && !term.no_color,
            };
        Self {
            table_color,
            // Debug logs share stderr with the spinner, so verbose runs go without.
            progress: term.stderr_tty && !flags.quiet && !flags.verbose,
            quiet: flags.quiet,
            term_width: term.columns.filter(|width| *width >= 40),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
