//! Line Scanner
//!
//! Splits Z-LANG source into numbered lines. There is no tokenizer here:
//! the rule engine works on raw and trimmed line text directly.

pub mod line;

pub use line::{is_space, split_space, trim_space, Line, LineKind, COMMENT_MARKER};

/// Split source text into numbered lines
///
/// Lines are separated by `'\n'` only, so a trailing break yields a final
/// empty line and the empty string yields a single empty line. Carriage
/// returns stay in the line content and disappear once it is trimmed.
pub fn scan_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(idx, content)| Line::new(idx + 1, content))
}

/// Only the lines the rule engine should check
pub fn eligible_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    scan_lines(text).filter(Line::is_eligible)
}
