//! Terminal output
//!
//! All user-facing messages go through [`Reporter`], which applies the
//! `--silent` / `--verbose` policy in one place:
//! - normal and verbose messages go to stdout
//! - warnings and errors go to stderr
//! - silent suppresses everything and wins over verbose

use console::Style;

/// How much output to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(silent: bool, verbose: bool) -> Self {
        if silent {
            Verbosity::Silent
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Verbose,
    Warning,
    Error,
}

/// Severity-aware message sink
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Whether a message of `level` is shown
    pub fn enabled(&self, level: Level) -> bool {
        match self.verbosity {
            Verbosity::Silent => false,
            Verbosity::Normal => level != Level::Verbose,
            Verbosity::Verbose => true,
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if self.enabled(Level::Info) {
            println!("{}", message.as_ref());
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if self.enabled(Level::Info) {
            println!("{}", Style::new().green().apply_to(message.as_ref()));
        }
    }

    pub fn verbose(&self, message: impl AsRef<str>) {
        if self.enabled(Level::Verbose) {
            println!("{}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.enabled(Level::Warning) {
            eprintln!(
                "{} {}",
                Style::new().bold().yellow().apply_to("warning:"),
                message.as_ref()
            );
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if self.enabled(Level::Error) {
            eprintln!(
                "{} {}",
                Style::new().bold().red().apply_to("error:"),
                message.as_ref()
            );
        }
    }
}
