//! Two-column results table

use super::{OutputFormatter, Summary};
use crate::validation::Diagnostic;

const LINE_HEADER: &str = "Line";
const DESCRIPTION_HEADER: &str = "Description";
const NO_ERRORS_ROW: &str = "No syntax errors detected";

/// Plain-text table followed by the summary headline
#[derive(Debug, Clone, Default)]
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn line_cell(diagnostic: &Diagnostic) -> String {
        format!("Line {}", diagnostic.line)
    }
}

impl OutputFormatter for TableFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> anyhow::Result<String> {
        let cells: Vec<(String, &str)> = diagnostics
            .iter()
            .map(|d| (Self::line_cell(d), d.description.as_str()))
            .collect();

        let width = cells
            .iter()
            .map(|(line, _)| line.len())
            .max()
            .unwrap_or(0)
            .max(LINE_HEADER.len());

        let mut output = String::new();
        output.push_str(&format!("{:<width$} | {}\n", LINE_HEADER, DESCRIPTION_HEADER));
        output.push_str(&format!(
            "{}-+-{}\n",
            "-".repeat(width),
            "-".repeat(DESCRIPTION_HEADER.len())
        ));

        if cells.is_empty() {
            output.push_str(NO_ERRORS_ROW);
            output.push('\n');
        } else {
            for (line, description) in &cells {
                output.push_str(&format!("{:<width$} | {}\n", line, description));
            }
        }

        let summary = Summary::of(diagnostics);
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({})\n",
            summary.title(),
            summary.message(),
            summary.count_line()
        ));
        Ok(output)
    }
}
