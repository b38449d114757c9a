//! Settings for a generate run
//!
//! Command line flags win over `.envforge.yaml`, which wins over the
//! built-in defaults. Value and variable lists from both places are combined
//! with command line entries taking precedence.

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::config::{
    DEFAULT_IGNORED_DIRS, DEFAULT_OUTPUT_FILE_NAME, ProjectConfig, extra_variables, parse_pairs,
    placeholder_values,
};
use crate::error::{EnvforgeError, Result};
use crate::placeholder::PlaceholderTable;
use crate::values::status::DEFAULT_STATUS_COMMAND;

/// Fully resolved settings for [`super::GenerateOperation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory scanned for templates
    pub root: PathBuf,
    /// File name written next to each template
    pub output: String,
    pub merge: bool,
    pub override_existing: bool,
    pub dry_run: bool,
    /// User placeholder values, normalized and validated
    pub values: PlaceholderTable,
    /// Extra variables in first-seen order
    pub variables: Vec<(String, String)>,
    pub ignored_dirs: Vec<String>,
    /// Program and arguments of the status command
    pub status_command: Vec<String>,
}

impl GenerateOptions {
    /// Defaults for scanning `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            merge: true,
            override_existing: false,
            dry_run: false,
            values: PlaceholderTable::new(),
            variables: Vec::new(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect(),
            status_command: DEFAULT_STATUS_COMMAND
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Layer command line arguments over the project config.
    ///
    /// Malformed values or variables fail here, before any file is touched.
    pub fn from_args(
        args: &GenerateArgs,
        root: PathBuf,
        config: Option<&ProjectConfig>,
    ) -> Result<Self> {
        let config = config.cloned().unwrap_or_default();
        let defaults = Self::new(root);

        let mut value_pairs = config.value_pairs()?;
        if let Some(values) = &args.values {
            value_pairs.extend(parse_pairs(values, "value")?);
        }

        let mut variable_pairs = config.variable_pairs()?;
        if let Some(vars) = &args.vars {
            variable_pairs.extend(parse_pairs(vars, "variable")?);
        }

        let mut ignored_dirs = defaults.ignored_dirs;
        for name in config.ignore.into_iter().chain(args.ignored_dirs()) {
            if !ignored_dirs.contains(&name) {
                ignored_dirs.push(name);
            }
        }

        let status_command = match &args.status_command {
            Some(line) => {
                shell_words::split(line).map_err(|e| EnvforgeError::InvalidStatusCommand {
                    command: line.clone(),
                    reason: e.to_string(),
                })?
            }
            None => config.status_command.unwrap_or(defaults.status_command),
        };

        Ok(Self {
            root: defaults.root,
            output: args
                .output
                .clone()
                .or(config.output)
                .unwrap_or(defaults.output),
            merge: args.merge_flag().or(config.merge).unwrap_or(defaults.merge),
            override_existing: args.override_existing
                || config.override_existing.unwrap_or(defaults.override_existing),
            dry_run: args.dry_run,
            values: placeholder_values(&value_pairs)?,
            variables: extra_variables(&variable_pairs)?,
            ignored_dirs,
            status_command,
        })
    }
}
