//! Placeholder substitution

use std::collections::BTreeSet;

use crate::envfile::Line;
use crate::placeholder::{PlaceholderTable, collect_used, token_name};

/// Replace every `KEY=<name>` whose name is in `table`.
///
/// Non-assignment lines, literal values and unknown placeholders pass through
/// untouched, so an unresolved token stays in its bracketed form.
pub fn resolve(lines: &[Line], table: &PlaceholderTable) -> Vec<Line> {
    lines.iter().map(|line| resolve_line(line, table)).collect()
}

fn resolve_line(line: &Line, table: &PlaceholderTable) -> Line {
    let Line::KeyValue { key, value, .. } = line else {
        return line.clone();
    };

    match token_name(value).and_then(|name| table.get(&name)) {
        Some(resolved) => Line::key_value(key, resolved),
        None => line.clone(),
    }
}

/// Placeholders used by `lines` that `table` has no value for
pub fn unresolved(lines: &[Line], table: &PlaceholderTable) -> BTreeSet<String> {
    collect_used(lines)
        .into_iter()
        .filter(|name| !table.contains_key(name))
        .collect()
}
