//! Template discovery
//!
//! Walks a directory tree in a stable (name-sorted) order and collects every
//! `.env.template` file, skipping ignored directories entirely.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::TEMPLATE_FILE_NAME;

fn is_ignored(entry: &DirEntry, ignored: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignored.contains(name))
}

/// Find all template files below `root`
pub fn discover_templates(root: &Path, ignored_dirs: &[String]) -> Vec<PathBuf> {
    let ignored: HashSet<&str> = ignored_dirs.iter().map(String::as_str).collect();

    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, &ignored))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name() == TEMPLATE_FILE_NAME)
        .map(DirEntry::into_path)
        .collect()
}
