//! Unified diff previews for `--diff`

use similar::TextDiff;

/// Render a unified diff of one document with three lines of context.
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
