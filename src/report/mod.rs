//! Result Presentation
//!
//! Everything between the engine's diagnostic list and what a user sees:
//! the input gate, the success/failure summary, highlight geometry and the
//! output formatters.

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::scanner::{is_space, trim_space};
use crate::validation::Diagnostic;

/// Renders a diagnostic list for display
pub trait OutputFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> anyhow::Result<String>;
}

/// Output format selectable from the command line or config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Reject whitespace-only text and trim what reaches the engine
///
/// Line 1 of the analyzed text is the first line with content, so leading
/// blank lines are not counted. See [`leading_line_offset`] to map results
/// back onto the submitted text.
pub fn check_input(text: &str) -> Result<&str, CheckError> {
    let trimmed = trim_space(text);
    if trimmed.is_empty() {
        Err(CheckError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

/// Number of whole lines [`check_input`] drops from the start of `text`
pub fn leading_line_offset(text: &str) -> usize {
    let dropped = text.len() - text.trim_start_matches(is_space).len();
    text[..dropped].matches('\n').count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Headline shown after an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub error_count: usize,
    pub outcome: Outcome,
}

impl Summary {
    pub fn of(diagnostics: &[Diagnostic]) -> Self {
        let outcome = if diagnostics.is_empty() {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        Self {
            error_count: diagnostics.len(),
            outcome,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.outcome {
            Outcome::Success => "SYNTAX SUCCESSFULLY ANALYZED!",
            Outcome::Failure => "SYNTAX ERROR DETECTED!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self.outcome {
            Outcome::Success => "No syntax errors found in the code.",
            Outcome::Failure => "There is an error in the code.",
        }
    }

    /// One-line count, e.g. "3 errors found"
    pub fn count_line(&self) -> String {
        match self.error_count {
            0 => "No errors found".to_string(),
            1 => "1 error found".to_string(),
            n => format!("{} errors found", n),
        }
    }
}

/// Vertical placement of per-line highlight overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightGeometry {
    pub line_height: f64,
    pub vertical_offset: f64,
}

impl HighlightGeometry {
    pub const DEFAULT_LINE_HEIGHT: f64 = 24.0;
    pub const DEFAULT_VERTICAL_OFFSET: f64 = 10.0;

    pub fn new(line_height: f64, vertical_offset: f64) -> Self {
        Self {
            line_height,
            vertical_offset,
        }
    }

    /// Top edge of the overlay for a 1-based line number
    pub fn offset_for(&self, line: usize) -> f64 {
        line.saturating_sub(1) as f64 * self.line_height + self.vertical_offset
    }
}

impl Default for HighlightGeometry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINE_HEIGHT, Self::DEFAULT_VERTICAL_OFFSET)
    }
}
