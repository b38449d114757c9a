//! Parsing environment file text into lines

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Line;
use crate::error::{Result, file_read_failed};

/// `KEY = value`, everything after the first `=` (minus leading spaces) is the value
#[allow(clippy::expect_used)]
static ASSIGNMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z0-9_.-]+)\s*=\s*(.*)$").expect("assignment pattern is valid"));

/// Classify a single physical line
pub fn parse_line(text: &str) -> Line {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment(text.to_string());
    }

    match ASSIGNMENT_RE.captures(text) {
        Some(caps) => Line::KeyValue {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
            raw: text.to_string(),
        },
        None => Line::Comment(text.to_string()),
    }
}

/// Parse file contents; `\r\n` and `\n` both end a line
pub fn parse_str(content: &str) -> Vec<Line> {
    content
        .split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Read and parse an environment file
pub fn parse_file(path: &Path) -> Result<Vec<Line>> {
    let content = std::fs::read_to_string(path).map_err(|e| file_read_failed(path, &e))?;
    Ok(parse_str(&content))
}
