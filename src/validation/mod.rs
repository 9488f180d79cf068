//! Rule Engine
//!
//! Per-line syntax heuristics, separated from scanning and presentation.

pub mod engine;
pub mod rules;

pub use engine::{analyze, analyze_line, Diagnostic};
pub use rules::Rule;
