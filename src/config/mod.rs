//! Configuration for envforge
//!
//! This module contains:
//! - built-in defaults (template name, output name, ignored directories)
//! - `.envforge.yaml` - optional per-project defaults
//! - [`pairs`] - parsing of `key=value` lists from flags and the project file

pub mod pairs;

use std::path::Path;

use serde::Deserialize;

use crate::error::{EnvforgeError, Result, file_read_failed};

pub use pairs::{extra_variables, parse_pair, parse_pairs, placeholder_values};

/// Name of the template files searched for
pub const TEMPLATE_FILE_NAME: &str = ".env.template";

/// Destination written next to each template unless configured otherwise
pub const DEFAULT_OUTPUT_FILE_NAME: &str = ".env.local";

/// Project configuration file looked up in the scanned directory
pub const CONFIG_FILE_NAME: &str = ".envforge.yaml";

/// Directories never descended into
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    ".next",
    ".turbo",
    "vendor",
];

/// Project configuration (.envforge.yaml)
///
/// ```yaml
/// output: .env
/// override: true
/// ignore: [fixtures]
/// values:
///   - supabase-url=http://localhost:54321
/// variables:
///   - DEBUG=true
/// status_command: [supabase, status, --output, json]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Destination file name
    pub output: Option<String>,

    /// Merge into existing destination files
    pub merge: Option<bool>,

    /// Replace values of keys already in the destination
    #[serde(rename = "override")]
    pub override_existing: Option<bool>,

    /// Extra directory names to skip
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Placeholder values, one `name=value` per entry
    #[serde(default)]
    pub values: Vec<String>,

    /// Extra variables, one `KEY=VALUE` per entry
    #[serde(default)]
    pub variables: Vec<String>,

    /// Program and arguments of the status command
    pub status_command: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Parse project configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let has_content = yaml.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load `.envforge.yaml` from `dir`, if present
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }

        let yaml = std::fs::read_to_string(&path).map_err(|e| file_read_failed(&path, &e))?;
        let config = Self::from_yaml(&yaml).map_err(|e| EnvforgeError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(config))
    }

    /// `values` entries as pairs
    pub fn value_pairs(&self) -> Result<Vec<(String, String)>> {
        self.values
            .iter()
            .map(|entry| parse_pair(entry, "value"))
            .collect()
    }

    /// `variables` entries as pairs
    pub fn variable_pairs(&self) -> Result<Vec<(String, String)>> {
        self.variables
            .iter()
            .map(|entry| parse_pair(entry, "variable"))
            .collect()
    }
}
