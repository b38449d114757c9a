//! Rendering lines back to environment file text

use super::Line;

/// Comment placed above extra variables appended to a generated file
pub const EXTRA_VARIABLES_MARKER: &str = "# Extra variables";

/// Join lines with `\n`
pub fn render(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines for a trailing extra variables section: blank, marker, then one
/// assignment per variable in the given order
pub fn extra_variables_block(extras: &[(String, String)]) -> Vec<Line> {
    if extras.is_empty() {
        return Vec::new();
    }

    let mut block = Vec::with_capacity(extras.len() + 2);
    block.push(Line::Blank);
    block.push(Line::Comment(EXTRA_VARIABLES_MARKER.to_string()));
    block.extend(extras.iter().map(|(key, value)| Line::key_value(key, value)));
    block
}

/// Render lines and append the extra variables section, if any
pub fn render_with_extras(lines: &[Line], extras: &[(String, String)]) -> String {
    let block = extra_variables_block(extras);
    if block.is_empty() {
        return render(lines);
    }

    let mut all = lines.to_vec();
    all.extend(block);
    render(&all)
}
