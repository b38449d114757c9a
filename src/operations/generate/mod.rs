//! Generate operation
//!
//! Coordinates one run:
//! - discover templates and parse them
//! - build the placeholder table once from all value sources
//! - per template: resolve, merge with the destination, write (or preview)
//!
//! Input validation happens in [`GenerateOptions::from_args`], so by the time
//! an operation exists nothing can fail on bad user input anymore. Filesystem
//! errors abort the run; files written before the failure stay written.

pub mod options;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use options::GenerateOptions;

use crate::common::fs::write_atomic;
use crate::discovery::discover_templates;
use crate::engine::{apply_extra_variables, merge, resolve, unresolved};
use crate::envfile::{Line, parse_file, render, render_with_extras};
use crate::error::Result;
use crate::placeholder::{PlaceholderTable, collect_used};
use crate::ui::Reporter;
use crate::values::{HostAddressSource, StatusSource, ValueResolver};

/// Outcome of a generate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Destination files written, or that would be written in dry-run mode
    pub written: Vec<PathBuf>,
    /// Placeholders left in bracketed form in at least one file
    pub unresolved: BTreeSet<String>,
}

/// High-level generate operation
pub struct GenerateOperation {
    options: GenerateOptions,
    reporter: Reporter,
}

impl GenerateOperation {
    pub fn new(options: GenerateOptions, reporter: Reporter) -> Self {
        Self { options, reporter }
    }

    pub fn execute(
        &self,
        status: &dyn StatusSource,
        network: &dyn HostAddressSource,
    ) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();

        let templates = discover_templates(&self.options.root, &self.options.ignored_dirs);
        if templates.is_empty() {
            self.reporter.info(format!(
                "No {} files found in {}",
                crate::config::TEMPLATE_FILE_NAME,
                self.options.root.display()
            ));
            return Ok(summary);
        }
        self.reporter
            .verbose(format!("Found {} template(s)", templates.len()));

        let parsed = templates
            .into_iter()
            .map(|path| parse_file(&path).map(|lines| (path, lines)))
            .collect::<Result<Vec<_>>>()?;

        let used = collect_used(parsed.iter().flat_map(|(_, lines)| lines));
        let table = ValueResolver::new(status, network, self.reporter)
            .resolve(&used, &self.options.values);

        for (template, lines) in &parsed {
            self.process_template(template, lines, &table, &mut summary)?;
        }

        let count = summary.written.len();
        if self.options.dry_run {
            self.reporter
                .info(format!("[DRY RUN] {count} file(s) would be written"));
        } else {
            self.reporter.success(format!("Generated {count} file(s)"));
        }

        Ok(summary)
    }

    fn process_template(
        &self,
        template: &Path,
        lines: &[Line],
        table: &PlaceholderTable,
        summary: &mut GenerateSummary,
    ) -> Result<()> {
        self.reporter
            .verbose(format!("Processing {}", self.display_path(template)));

        let resolved = resolve(lines, table);
        for name in unresolved(lines, table) {
            self.reporter
                .verbose(format!("  <{name}> has no value, left as is"));
            summary.unresolved.insert(name);
        }

        let destination = template
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&self.options.output);
        let exists = destination.is_file();
        let content = self.render_destination(&resolved, &destination, exists)?;

        if self.options.dry_run {
            let action = if exists { "update" } else { "create" };
            self.reporter.info(format!(
                "[DRY RUN] Would {action} {}",
                self.display_path(&destination)
            ));
            self.reporter.verbose(&content);
        } else {
            write_atomic(&destination, &content)?;
            self.reporter
                .info(format!("Wrote {}", self.display_path(&destination)));
        }

        summary.written.push(destination);
        Ok(())
    }

    /// Final text of the destination file for already resolved lines
    fn render_destination(
        &self,
        resolved: &[Line],
        destination: &Path,
        exists: bool,
    ) -> Result<String> {
        let variables = &self.options.variables;
        let override_existing = self.options.override_existing;

        if !self.options.merge {
            return Ok(render_with_extras(resolved, variables));
        }

        let existing = if exists {
            parse_file(destination)?
        } else {
            Vec::new()
        };
        let base = merge(&existing, resolved, override_existing);
        Ok(render(&apply_extra_variables(
            &base,
            variables,
            override_existing,
        )))
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.options.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
