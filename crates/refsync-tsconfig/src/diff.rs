//! Unified diff rendering for drift reporting

use similar::TextDiff;

/// Number of unchanged context lines shown around each change.
const CONTEXT_RADIUS: usize = 3;

/// Render a unified diff between the current file content and its
/// expected canonical form. Identical inputs render as an empty string.
pub fn unified(current: &str, expected: &str) -> String {
    let text_diff = TextDiff::from_lines(current, expected);
    text_diff
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("current", "expected")
        .to_string()
}
