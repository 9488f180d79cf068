//! JSON output for editors and scripts

use serde::Serialize;

use super::{HighlightGeometry, Outcome, OutputFormatter, Summary};
use crate::validation::{Diagnostic, Rule};

/// Machine-readable output including highlight offsets
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
    pub geometry: HighlightGeometry,
}

impl JsonFormatter {
    pub fn new(geometry: HighlightGeometry) -> Self {
        Self {
            pretty: false,
            geometry,
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    line: usize,
    rule: Rule,
    description: &'a str,
    highlight_offset: f64,
}

#[derive(Serialize)]
struct JsonSummary {
    error_count: usize,
    outcome: Outcome,
    title: &'static str,
    message: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> anyhow::Result<String> {
        let summary = Summary::of(diagnostics);
        let output = JsonOutput {
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    line: d.line,
                    rule: d.rule,
                    description: &d.description,
                    highlight_offset: self.geometry.offset_for(d.line),
                })
                .collect(),
            summary: JsonSummary {
                error_count: summary.error_count,
                outcome: summary.outcome,
                title: summary.title(),
                message: summary.message(),
            },
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        Ok(rendered)
    }
}
