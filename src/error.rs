//! Error types and handling for envforge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only user input problems and filesystem failures live here. Failures of the
//! value sources are degraded to warnings, see [`crate::values::StatusError`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for envforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum EnvforgeError {
    // Input errors
    #[error("Invalid {kind} entry '{input}': {reason}")]
    #[diagnostic(
        code(envforge::input::invalid_pair),
        help("Entries are comma separated and use the form key=value, e.g. a=1,b=2")
    )]
    InvalidPair {
        kind: String,
        input: String,
        reason: String,
    },

    #[error("Invalid placeholder name '{name}': must match {pattern}")]
    #[diagnostic(
        code(envforge::input::invalid_placeholder),
        help("Placeholder names may only contain letters, digits, dashes and underscores")
    )]
    InvalidPlaceholder { name: String, pattern: String },

    #[error("Invalid variable name '{name}'")]
    #[diagnostic(
        code(envforge::input::invalid_variable),
        help("Variable names may only contain ASCII letters, digits, '_', '.' and '-'")
    )]
    InvalidVariableName { name: String },

    #[error("Invalid status command '{command}': {reason}")]
    #[diagnostic(
        code(envforge::input::invalid_status_command),
        help("Quote program paths that contain spaces, e.g. '\"/opt/my tools/status\" --json'")
    )]
    InvalidStatusCommand { command: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(envforge::input::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(envforge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(envforge::fs::directory_not_found),
        help("Pass an existing directory, or omit it to scan the current directory")
    )]
    DirectoryNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(envforge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(envforge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(envforge::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for EnvforgeError {
    fn from(err: std::io::Error) -> Self {
        EnvforgeError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Creates an invalid pair error
pub fn invalid_pair(
    kind: impl Into<String>,
    input: impl Into<String>,
    reason: impl Into<String>,
) -> EnvforgeError {
    EnvforgeError::InvalidPair {
        kind: kind.into(),
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates a file read error for `path`
pub fn file_read_failed(path: &std::path::Path, err: &std::io::Error) -> EnvforgeError {
    EnvforgeError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error for `path`
pub fn file_write_failed(path: &std::path::Path, reason: impl ToString) -> EnvforgeError {
    EnvforgeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EnvforgeError>;
