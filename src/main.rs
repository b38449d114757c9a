//! envforge - environment file generator
//!
//! Scans a directory tree for `.env.template` files, resolves `<placeholder>`
//! values and writes a local env file next to each template, merging into
//! files that already exist.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod discovery;
mod engine;
mod envfile;
mod error;
mod operations;
mod placeholder;
mod ui;
mod values;

use cli::{Cli, Commands};
use ui::{Reporter, Verbosity};

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(Verbosity::from_flags(cli.silent, cli.verbose));

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, reporter),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        reporter.error(e.to_string());
        std::process::exit(1);
    }
}
