//! Generate command implementation
//!
//! Resolves the scan root, loads `.envforge.yaml` from it and hands the
//! layered options to [`GenerateOperation`] with the real value sources.

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::config::ProjectConfig;
use crate::error::{EnvforgeError, Result};
use crate::operations::generate::{GenerateOperation, GenerateOptions};
use crate::ui::Reporter;
use crate::values::{CommandStatusSource, InterfaceAddressSource};

/// Run generate command
pub fn run(args: GenerateArgs, reporter: Reporter) -> Result<()> {
    let root = get_root_path(args.dir.clone())?;
    if !root.is_dir() {
        return Err(EnvforgeError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    let config = ProjectConfig::load(&root)?;
    if config.is_some() {
        reporter.verbose(format!(
            "Loaded {}",
            root.join(crate::config::CONFIG_FILE_NAME).display()
        ));
    }

    let options = GenerateOptions::from_args(&args, root, config.as_ref())?;
    let status = CommandStatusSource::new(options.status_command.clone());

    let summary =
        GenerateOperation::new(options, reporter).execute(&status, &InterfaceAddressSource)?;
    if !summary.unresolved.is_empty() {
        let names: Vec<String> = summary.unresolved.iter().map(|n| format!("<{n}>")).collect();
        reporter.verbose(format!("Left unresolved: {}", names.join(", ")));
    }
    Ok(())
}

/// Get the scan root from the CLI argument or the current directory
fn get_root_path(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| EnvforgeError::IoError {
            message: format!("Failed to get current directory: {e}"),
            source: Some(Box::new(e)),
        }),
    }
}
