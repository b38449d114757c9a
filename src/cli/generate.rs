use clap::Parser;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Generate for the current directory:\n    envforge generate\n\n\
                   Generate for a sub tree:\n    envforge generate ./apps\n\n\
                   Overwrite values already in .env.local:\n    envforge generate --override\n\n\
                   Replace destination files instead of merging:\n    envforge generate --no-merge\n\n\
                   Provide placeholder values:\n    envforge generate --values supabase-url=http://localhost:54321,host-ip=10.0.0.2\n\n\
                   Append extra variables:\n    envforge generate --vars DEBUG=true,LOG_LEVEL=info\n\n\
                   Preview without writing:\n    envforge generate --dry-run -v")]
pub struct GenerateArgs {
    /// Directory to scan for .env.template files (defaults to current directory)
    pub dir: Option<PathBuf>,

    /// Name of the file written next to each template
    #[arg(long, short = 'o', value_name = "FILE", env = "ENVFORGE_OUTPUT")]
    pub output: Option<String>,

    /// Merge into existing destination files (default)
    #[arg(long, overrides_with = "no_merge")]
    pub merge: bool,

    /// Replace destination files instead of merging
    #[arg(long, overrides_with = "merge")]
    pub no_merge: bool,

    /// Replace values of keys that already exist in the destination
    #[arg(long = "override")]
    pub override_existing: bool,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Placeholder values, e.g. supabase-url=http://localhost:54321,host-ip=10.0.0.2
    #[arg(long, value_name = "NAME=VALUE,...")]
    pub values: Option<String>,

    /// Extra variables appended to every generated file, e.g. DEBUG=true
    #[arg(long, value_name = "KEY=VALUE,...")]
    pub vars: Option<String>,

    /// Additional directory names to skip, comma separated
    #[arg(long, value_name = "DIR,...", env = "ENVFORGE_IGNORE")]
    pub ignore: Option<String>,

    /// Command printing the status JSON, shell-quoted (default: supabase status --output json)
    #[arg(long, value_name = "COMMAND", env = "ENVFORGE_STATUS_COMMAND")]
    pub status_command: Option<String>,
}

impl GenerateArgs {
    /// Merge policy from `--merge` / `--no-merge`, if either was given
    pub fn merge_flag(&self) -> Option<bool> {
        if self.no_merge {
            Some(false)
        } else if self.merge {
            Some(true)
        } else {
            None
        }
    }

    /// Directory names from `--ignore`
    pub fn ignored_dirs(&self) -> Vec<String> {
        self.ignore
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
