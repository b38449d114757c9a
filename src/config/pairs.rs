//! Parsing of comma separated `key=value` lists

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{EnvforgeError, Result, invalid_pair};
use crate::placeholder::{PlaceholderTable, validate_key};

#[allow(clippy::expect_used)]
static VARIABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("variable name pattern is valid"));

/// Split `a=1,b=2` into pairs, in order.
///
/// Empty entries are skipped. Keys are trimmed and must not be empty; values
/// are kept verbatim and may contain `=`.
pub fn parse_pairs(text: &str, kind: &str) -> Result<Vec<(String, String)>> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_pair(entry, kind))
        .collect()
}

/// Parse a single `key=value` entry
pub fn parse_pair(entry: &str, kind: &str) -> Result<(String, String)> {
    let Some((key, value)) = entry.split_once('=') else {
        return Err(invalid_pair(kind, entry, "expected key=value"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid_pair(kind, entry, "key is empty"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Turn user value pairs into a placeholder table; later pairs win
pub fn placeholder_values(pairs: &[(String, String)]) -> Result<PlaceholderTable> {
    let mut table = PlaceholderTable::new();
    for (name, value) in pairs {
        table.insert(validate_key(name)?, value.clone());
    }
    Ok(table)
}

/// Check extra variable names and drop duplicates.
///
/// The first occurrence keeps its position, the last one provides the value.
pub fn extra_variables(pairs: &[(String, String)]) -> Result<Vec<(String, String)>> {
    let mut variables: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if !VARIABLE_NAME_RE.is_match(key) {
            return Err(EnvforgeError::InvalidVariableName { name: key.clone() });
        }
        match variables.iter_mut().find(|entry| entry.0 == *key) {
            Some(entry) => entry.1.clone_from(value),
            None => variables.push((key.clone(), value.clone())),
        }
    }
    Ok(variables)
}
