//! Z-LANG Syntax Checker
//!
//! A line-oriented syntax checker for the Z-LANG toy language.
//!
//! This library provides:
//! - Line scanning and a fixed battery of per-line rules
//! - Result presentation (tables, JSON, summaries)
//! - An LSP front end for editors
//! - Configuration management

pub mod config;
pub mod error;
pub mod lsp;
pub mod report;
pub mod scanner;
pub mod validation;
pub mod vocabulary;

// Re-exports for clean public API
pub use config::Config;
pub use error::CheckError;
pub use scanner::{scan_lines, Line};
pub use validation::{analyze, Diagnostic, Rule};
