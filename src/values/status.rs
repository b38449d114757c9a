//! External status command as a value source
//!
//! The status command (by default `supabase status --output json`) prints a
//! single JSON object. Its top-level string fields provide the built-in
//! `supabase-*` placeholders: the name minus its `supabase-` prefix,
//! uppercased with dashes turned into underscores (`supabase-anon-key` is
//! read from `ANON_KEY`).

use std::collections::BTreeSet;
use std::process::Command;

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::placeholder::{PlaceholderTable, is_status_placeholder};

/// Command used when none is configured
pub const DEFAULT_STATUS_COMMAND: &[&str] = &["supabase", "status", "--output", "json"];

const STATUS_PREFIX: &str = "supabase-";

/// Why the status command produced no values
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("no status command configured")]
    NotConfigured,

    #[error("failed to run '{command}': {reason}")]
    Launch { command: String, reason: String },

    #[error("'{command}' exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("'{command}' returned invalid JSON: {reason}")]
    InvalidJson { command: String, reason: String },

    #[error("'{command}' did not return a JSON object")]
    NotAnObject { command: String },
}

/// Source of values for the built-in status placeholders
pub trait StatusSource {
    /// Look up values for `names`; names it does not know are skipped
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PlaceholderTable, StatusError>;
}

/// Runs an external command and reads its JSON output
#[derive(Debug, Clone)]
pub struct CommandStatusSource {
    command: Vec<String>,
}

impl CommandStatusSource {
    /// Program followed by its arguments
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl StatusSource for CommandStatusSource {
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PlaceholderTable, StatusError> {
        let wanted: Vec<&String> = names
            .iter()
            .filter(|name| is_status_placeholder(name))
            .collect();
        if wanted.is_empty() {
            return Ok(PlaceholderTable::new());
        }

        let Some((program, args)) = self.command.split_first() else {
            return Err(StatusError::NotConfigured);
        };
        let command = self.command_line();

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| StatusError::Launch {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StatusError::Exit {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        table_from_json(&command, &stdout, wanted)
    }
}

/// JSON fields consulted for a built-in placeholder, in order
pub fn status_fields(name: &str) -> Vec<String> {
    let Some(rest) = name.strip_prefix(STATUS_PREFIX) else {
        return Vec::new();
    };

    let mut fields = vec![rest.to_uppercase().replace('-', "_")];
    if rest == "url" {
        fields.push("API_URL".to_string());
    }
    fields
}

/// Pick the requested placeholders out of the status JSON
pub fn table_from_json<'a>(
    command: &str,
    stdout: &str,
    names: impl IntoIterator<Item = &'a String>,
) -> Result<PlaceholderTable, StatusError> {
    let json: JsonValue =
        serde_json::from_str(stdout.trim()).map_err(|e| StatusError::InvalidJson {
            command: command.to_string(),
            reason: e.to_string(),
        })?;
    let JsonValue::Object(fields) = json else {
        return Err(StatusError::NotAnObject {
            command: command.to_string(),
        });
    };

    let mut table = PlaceholderTable::new();
    for name in names {
        let value = status_fields(name)
            .iter()
            .find_map(|field| fields.get(field).and_then(JsonValue::as_str));
        if let Some(value) = value {
            table.insert(name.clone(), value.to_string());
        }
    }
    Ok(table)
}
