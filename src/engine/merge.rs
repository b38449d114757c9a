//! Merging generated lines into an existing destination file
//!
//! Merging never removes anything from the destination. Keys present only in
//! the destination, comments and blank lines all stay where they are. Keys
//! shared with the generated lines are replaced only when overriding, and
//! brand-new keys are appended in generated order, followed by any generated
//! comments the destination does not have yet. Appended content goes before
//! the destination's trailing blank lines so a final newline survives.
//!
//! ```text
//! Existing:  # db            Generated:  PORT=3000
//!            PORT=9999                   # api
//!            SECRET=s                    URL=http://x
//!
//! merge(.., false):  # db / PORT=9999 / SECRET=s / URL=http://x / # api
//! merge(.., true):   # db / PORT=3000 / SECRET=s / URL=http://x / # api
//! ```

use std::collections::HashMap;

use crate::envfile::{EXTRA_VARIABLES_MARKER, Line, extra_variables_block};

/// Index where the run of trailing blank lines starts
fn trailing_blanks_start(lines: &[Line]) -> usize {
    lines
        .iter()
        .rposition(|line| *line != Line::Blank)
        .map_or(0, |last| last + 1)
}

/// Insert `appended` before the trailing blank lines of `lines`
fn append_before_trailing_blanks(lines: &mut Vec<Line>, appended: Vec<Line>) {
    let at = trailing_blanks_start(lines);
    lines.splice(at..at, appended);
}

/// Merge `new_lines` into `existing`, see the module docs for the policy.
///
/// When `new_lines` repeats a key, its last occurrence is the one used. An
/// existing side with no content yields `new_lines` unchanged.
pub fn merge(existing: &[Line], new_lines: &[Line], override_existing: bool) -> Vec<Line> {
    if existing.iter().all(|line| *line == Line::Blank) {
        return new_lines.to_vec();
    }

    let mut pending: HashMap<&str, &Line> = new_lines
        .iter()
        .filter_map(|line| line.key().map(|key| (key, line)))
        .collect();

    let mut merged = Vec::with_capacity(existing.len() + pending.len());
    for line in existing {
        let Some(key) = line.key() else {
            merged.push(line.clone());
            continue;
        };
        match pending.remove(key) {
            Some(replacement) if override_existing => merged.push(replacement.clone()),
            _ => merged.push(line.clone()),
        }
    }

    let mut appended: Vec<Line> = new_lines
        .iter()
        .filter_map(|line| line.key().and_then(|key| pending.remove(key)))
        .cloned()
        .collect();
    appended.extend(generated_comment_block(existing, new_lines));

    append_before_trailing_blanks(&mut merged, appended);
    merged
}

/// Comments and blanks only found in `new_lines`, in their generated order.
///
/// Comments the destination already contains are skipped, and a block left
/// with nothing but blank lines is dropped, so a rerun adds nothing.
fn generated_comment_block(existing: &[Line], new_lines: &[Line]) -> Vec<Line> {
    let block: Vec<Line> = new_lines
        .iter()
        .filter(|line| match line {
            Line::Blank => true,
            Line::Comment(text) => !existing.contains(&Line::Comment(text.clone())),
            Line::KeyValue { .. } => false,
        })
        .cloned()
        .collect();

    if !block.iter().any(|line| matches!(line, Line::Comment(_))) {
        return Vec::new();
    }
    let end = trailing_blanks_start(&block);
    block[..end].to_vec()
}

/// Fold extra variables into `lines`.
///
/// Keys already present are updated only when overriding. Missing keys are
/// appended under the extra variables marker, which is added once.
pub fn apply_extra_variables(
    lines: &[Line],
    extras: &[(String, String)],
    override_existing: bool,
) -> Vec<Line> {
    let mut result = lines.to_vec();
    let mut absent = Vec::new();

    for (key, value) in extras {
        let mut found = false;
        for line in result
            .iter_mut()
            .filter(|line| line.key() == Some(key.as_str()))
        {
            found = true;
            if override_existing {
                *line = Line::key_value(key, value);
            }
        }
        if !found {
            absent.push((key.clone(), value.clone()));
        }
    }

    if absent.is_empty() {
        return result;
    }

    let has_marker = result
        .iter()
        .any(|line| matches!(line, Line::Comment(text) if text.trim() == EXTRA_VARIABLES_MARKER));
    let appended = if has_marker {
        absent
            .iter()
            .map(|(key, value)| Line::key_value(key, value))
            .collect()
    } else {
        extra_variables_block(&absent)
    };
    append_before_trailing_blanks(&mut result, appended);
    result
}
