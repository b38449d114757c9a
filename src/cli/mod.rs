//! CLI definitions using clap derive API

pub mod completions;
pub mod generate;

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// envforge - environment file generator
///
/// Resolve placeholders in .env.template files and write local env files.
#[derive(Parser, Debug)]
#[command(
    name = "envforge",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate local env files from .env.template files",
    long_about = "envforge scans a directory tree for .env.template files, resolves \
                  <placeholder> values from your own values, the local network and \
                  `supabase status`, and writes the result next to each template, \
                  merging into files that already exist.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  envforge generate\n    \
                  envforge generate ./apps --override\n    \
                  envforge generate --values supabase-url=http://localhost:54321\n    \
                  envforge generate --dry-run -v"
)]
pub struct Cli {
    /// Suppress all output
    #[arg(long, short = 's', global = true)]
    pub silent: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate env files from templates
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
