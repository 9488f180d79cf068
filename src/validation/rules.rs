//! Line Rules
//!
//! The fixed battery of per-line checks. Each check looks at a single line
//! and never at its neighbours, so an opener on one line and its closer on
//! the next are both reported.

use serde::Serialize;

use crate::scanner::{split_space, trim_space};
use crate::vocabulary::DECLARATION_KEYWORD;

/// Prefixes that route a line into the declaration check
const DECLARATION_PREFIXES: [&str; 2] = ["LETT", "Lett"];

/// Every complaint the engine can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MissingSemicolon,
    InvalidKeyword,
    MissingVariableName,
    UnmatchedParentheses,
    UnmatchedBraces,
    InvalidAssignment,
}

impl Rule {
    /// Stable identifier used in JSON output and LSP diagnostic codes
    pub fn code(self) -> &'static str {
        match self {
            Rule::MissingSemicolon => "missing-semicolon",
            Rule::InvalidKeyword => "invalid-keyword",
            Rule::MissingVariableName => "missing-variable-name",
            Rule::UnmatchedParentheses => "unmatched-parentheses",
            Rule::UnmatchedBraces => "unmatched-braces",
            Rule::InvalidAssignment => "invalid-assignment",
        }
    }

    /// Human-readable complaint shown in the results table
    pub fn description(self) -> &'static str {
        match self {
            Rule::MissingSemicolon => "Missing semicolon at end of statement",
            Rule::InvalidKeyword => "Invalid keyword - use LETT (uppercase)",
            Rule::MissingVariableName => "Missing variable name after LETT",
            Rule::UnmatchedParentheses => "Unmatched parentheses",
            Rule::UnmatchedBraces => "Unmatched braces",
            Rule::InvalidAssignment => "Invalid assignment syntax",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A single check: reads the trimmed and raw text, pushes any violations
pub type LineCheck = fn(trimmed: &str, raw: &str, out: &mut Vec<Rule>);

/// Checks in evaluation order
pub const CHECKS: [LineCheck; 5] = [
    check_terminator,
    check_declaration,
    check_parentheses,
    check_braces,
    check_assignment,
];

/// Apply every check to one line, in order
pub fn run_checks(trimmed: &str, raw: &str) -> Vec<Rule> {
    let mut violations = Vec::new();
    for check in CHECKS {
        check(trimmed, raw, &mut violations);
    }
    violations
}

/// Statements end with `;`; block openers and closers are exempt
pub fn check_terminator(trimmed: &str, _raw: &str, out: &mut Vec<Rule>) {
    if !trimmed.ends_with([';', '{', '}']) {
        out.push(Rule::MissingSemicolon);
    }
}

/// `LETT name ...` declarations
///
/// Routing is a plain prefix test, so `LETTX foo` lands here too and gets
/// told to use `LETT`. Both complaints may fire on one line.
pub fn check_declaration(trimmed: &str, _raw: &str, out: &mut Vec<Rule>) {
    if !DECLARATION_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        return;
    }

    let mut parts = split_space(trimmed);
    if parts.next() != Some(DECLARATION_KEYWORD) {
        out.push(Rule::InvalidKeyword);
    }
    if parts.next().is_none() {
        out.push(Rule::MissingVariableName);
    }
}

pub fn check_parentheses(_trimmed: &str, raw: &str, out: &mut Vec<Rule>) {
    if !is_balanced(raw, '(', ')') {
        out.push(Rule::UnmatchedParentheses);
    }
}

pub fn check_braces(_trimmed: &str, raw: &str, out: &mut Vec<Rule>) {
    if !is_balanced(raw, '{', '}') {
        out.push(Rule::UnmatchedBraces);
    }
}

/// `target = value` with at most two words before the first `=`
///
/// Any `=` without `==` counts as an assignment, which means `<=`, `>=` and
/// `!=` comparisons are checked as well.
pub fn check_assignment(_trimmed: &str, raw: &str, out: &mut Vec<Rule>) {
    if raw.contains("==") {
        return;
    }
    let Some((before, _)) = raw.split_once('=') else {
        return;
    };

    let target = trim_space(before);
    if target.is_empty() || split_space(target).count() > 2 {
        out.push(Rule::InvalidAssignment);
    }
}

/// Equal counts of `open` and `close`, ignoring their order
fn is_balanced(text: &str, open: char, close: char) -> bool {
    let (opened, closed) = text.chars().fold((0usize, 0usize), |(o, c), ch| {
        if ch == open {
            (o + 1, c)
        } else if ch == close {
            (o, c + 1)
        } else {
            (o, c)
        }
    });
    opened == closed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(f: LineCheck, line: &str) -> Vec<Rule> {
        let mut out = Vec::new();
        f(trim_space(line), line, &mut out);
        out
    }

    #[test]
    fn test_terminator_accepts_block_edges() {
        assert!(check(check_terminator, "OUT x;").is_empty());
        assert!(check(check_terminator, "WHILE (x) {").is_empty());
        assert!(check(check_terminator, "}").is_empty());
        assert!(check(check_terminator, "} ELSE {  ").is_empty());
        assert_eq!(
            check(check_terminator, "OUT x"),
            vec![Rule::MissingSemicolon]
        );
    }

    #[test]
    fn test_declaration_exact_keyword() {
        assert!(check(check_declaration, "LETT x = 5;").is_empty());
        assert_eq!(
            check(check_declaration, "Lett y 10;"),
            vec![Rule::InvalidKeyword]
        );
    }

    #[test]
    fn test_declaration_prefix_overtriggers() {
        assert_eq!(
            check(check_declaration, "LETTX foo;"),
            vec![Rule::InvalidKeyword]
        );
        assert_eq!(
            check(check_declaration, "Letter = 3;"),
            vec![Rule::InvalidKeyword]
        );
        // Lowercase is not routed into the check at all
        assert!(check(check_declaration, "lett x;").is_empty());
    }

    #[test]
    fn test_declaration_both_complaints() {
        assert_eq!(
            check(check_declaration, "LETT;"),
            vec![Rule::InvalidKeyword, Rule::MissingVariableName]
        );
        assert_eq!(
            check(check_declaration, "LETT"),
            vec![Rule::MissingVariableName]
        );
    }

    #[test]
    fn test_byte_order_mark_separates_words() {
        assert_eq!(
            check(check_declaration, "LETT\u{FEFF}"),
            vec![Rule::MissingVariableName]
        );
        assert_eq!(
            check(check_assignment, "\u{FEFF}a\u{FEFF}b\u{FEFF}c = 1;"),
            vec![Rule::InvalidAssignment]
        );
    }

    #[test]
    fn test_parentheses_counts_not_order() {
        assert!(check(check_parentheses, "OUT avg(a, max(b, c));").is_empty());
        assert!(check(check_parentheses, ")(").is_empty());
        assert_eq!(
            check(check_parentheses, "IF (x > 5 {"),
            vec![Rule::UnmatchedParentheses]
        );
    }

    #[test]
    fn test_braces_are_per_line() {
        assert_eq!(
            check(check_braces, "STRUCT point {"),
            vec![Rule::UnmatchedBraces]
        );
        assert!(check(check_braces, "IF (x) { OUT x; }").is_empty());
    }

    #[test]
    fn test_assignment_shape() {
        assert!(check(check_assignment, "x = 5;").is_empty());
        assert!(check(check_assignment, "LETT x = 5;").is_empty());
        assert!(check(check_assignment, "x == 5;").is_empty());
        assert_eq!(
            check(check_assignment, "= 5;"),
            vec![Rule::InvalidAssignment]
        );
        assert_eq!(
            check(check_assignment, "LETT x y = 5;"),
            vec![Rule::InvalidAssignment]
        );
    }

    #[test]
    fn test_assignment_catches_comparisons() {
        assert!(check(check_assignment, "x <= 5;").is_empty());
        assert_eq!(
            check(check_assignment, "IF (a b >= c) {"),
            vec![Rule::InvalidAssignment]
        );
        assert!(check(check_assignment, "a != b;").is_empty());
        assert_eq!(
            check(check_assignment, "IF (x != y) {"),
            vec![Rule::InvalidAssignment]
        );
    }

    #[test]
    fn test_run_checks_order() {
        let rules = run_checks("Lett=(", "  Lett=(");
        assert_eq!(
            rules,
            vec![
                Rule::MissingSemicolon,
                Rule::InvalidKeyword,
                Rule::MissingVariableName,
                Rule::UnmatchedParentheses,
            ]
        );

        let rules = run_checks("Lett(x{", "Lett(x{");
        assert_eq!(
            rules,
            vec![
                Rule::InvalidKeyword,
                Rule::MissingVariableName,
                Rule::UnmatchedParentheses,
                Rule::UnmatchedBraces,
            ]
        );
    }

    #[test]
    fn test_codes_and_descriptions_are_distinct() {
        let all = [
            Rule::MissingSemicolon,
            Rule::InvalidKeyword,
            Rule::MissingVariableName,
            Rule::UnmatchedParentheses,
            Rule::UnmatchedBraces,
            Rule::InvalidAssignment,
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|r| r.code()).collect();
        let texts: std::collections::HashSet<_> = all.iter().map(|r| r.description()).collect();
        assert_eq!(codes.len(), all.len());
        assert_eq!(texts.len(), all.len());
    }
}
