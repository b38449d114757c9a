//! Placeholder names and tokens
//!
//! A template value is a placeholder token only when the whole trimmed value
//! is wrapped in angle brackets, e.g. `API_URL=<supabase-api-url>`. Names are
//! compared in normalized form: trimmed, lowercase, `_` replaced by `-`.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::envfile::Line;
use crate::error::{EnvforgeError, Result};

/// Resolved placeholder values keyed by normalized name
pub type PlaceholderTable = BTreeMap<String, String>;

/// Placeholder filled from the local network interfaces
pub const HOST_IP: &str = "host-ip";

/// Placeholders filled from the external status command
pub const STATUS_PLACEHOLDERS: &[&str] = &[
    "supabase-url",
    "supabase-anon-key",
    "supabase-db-url",
    "supabase-api-url",
    "supabase-graphql-url",
    "supabase-service-role-key",
];

/// Pattern a normalized user-supplied name must match
pub const NAME_PATTERN: &str = "^[a-z0-9-]+$";

#[allow(clippy::expect_used)]
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"));

#[allow(clippy::expect_used)]
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(.+)>$").expect("token pattern is valid"));

/// Canonical form of a placeholder name
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}

/// Normalize a user-supplied name and reject anything outside `[a-z0-9-]`
pub fn validate_key(raw: &str) -> Result<String> {
    let name = normalize(raw);
    if NAME_RE.is_match(&name) {
        Ok(name)
    } else {
        Err(EnvforgeError::InvalidPlaceholder {
            name: raw.to_string(),
            pattern: NAME_PATTERN.to_string(),
        })
    }
}

/// Normalized placeholder name if the whole value is a `<...>` token
pub fn token_name(value: &str) -> Option<String> {
    TOKEN_RE
        .captures(value.trim())
        .map(|caps| normalize(&caps[1]))
}

/// Names of every placeholder token used by the given lines
pub fn collect_used<'a>(lines: impl IntoIterator<Item = &'a Line>) -> BTreeSet<String> {
    lines
        .into_iter()
        .filter_map(Line::value)
        .filter_map(token_name)
        .collect()
}

pub fn is_status_placeholder(name: &str) -> bool {
    STATUS_PLACEHOLDERS.contains(&name)
}
