//! Line model for environment files
//!
//! An environment file is handled as a sequence of [`Line`]s, one per
//! physical line of text. Anything that is not a recognizable `KEY=VALUE`
//! assignment is kept as an opaque comment so that nothing is ever dropped.
//!
//! - [`parser`]: text to lines
//! - [`render`]: lines back to text

pub mod parser;
pub mod render;

pub use parser::{parse_file, parse_line, parse_str};
pub use render::{EXTRA_VARIABLES_MARKER, extra_variables_block, render, render_with_extras};

/// One physical line of an environment file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace-only line
    Blank,
    /// `#` comment or any line that is not an assignment, kept verbatim
    Comment(String),
    /// `KEY=VALUE` assignment
    KeyValue {
        key: String,
        value: String,
        /// Text the line was parsed from, or `key=value` for generated lines
        raw: String,
    },
}

impl Line {
    /// Build a generated assignment line
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let raw = format!("{key}={value}");
        Line::KeyValue { key, value, raw }
    }

    /// Key of an assignment line
    pub fn key(&self) -> Option<&str> {
        match self {
            Line::KeyValue { key, .. } => Some(key),
            Line::Blank | Line::Comment(_) => None,
        }
    }

    /// Value of an assignment line
    pub fn value(&self) -> Option<&str> {
        match self {
            Line::KeyValue { value, .. } => Some(value),
            Line::Blank | Line::Comment(_) => None,
        }
    }

    /// Text of this line as written to disk
    ///
    /// Parsed assignments keep their original spacing; generated ones are
    /// plain `key=value`.
    pub fn to_text(&self) -> &str {
        match self {
            Line::Blank => "",
            Line::Comment(text) => text,
            Line::KeyValue { raw, .. } => raw,
        }
    }
}
