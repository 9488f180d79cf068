//! Analysis Engine
//!
//! Runs the rule battery over every eligible line of a source text.
//! Analysis is total: any input produces a (possibly empty) list.

use serde::Serialize;

use crate::scanner::{scan_lines, Line};
use crate::validation::rules::{run_checks, Rule};

/// One syntax complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    pub rule: Rule,
    pub description: String,
}

impl Diagnostic {
    pub fn new(line: usize, rule: Rule) -> Self {
        Self {
            line,
            rule,
            description: rule.description().to_string(),
        }
    }
}

/// Check a single line
///
/// Blank and comment lines produce nothing.
pub fn analyze_line(line: &Line<'_>) -> Vec<Diagnostic> {
    if !line.is_eligible() {
        return Vec::new();
    }

    let rules = run_checks(line.trimmed(), line.content);
    if !rules.is_empty() {
        log::trace!("line {}: {:?}", line.number, rules);
    }

    rules
        .into_iter()
        .map(|rule| Diagnostic::new(line.number, rule))
        .collect()
}

/// Check an entire source text
pub fn analyze(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut line_count = 0;

    for line in scan_lines(text) {
        line_count += 1;
        diagnostics.extend(analyze_line(&line));
    }

    log::debug!(
        "analyzed {} lines, {} diagnostics",
        line_count,
        diagnostics.len()
    );
    diagnostics
}
