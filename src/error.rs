//! Caller-facing failures
//!
//! Syntax complaints are never errors; they are returned as diagnostics.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// Nothing but whitespace was submitted
    #[error("NO CODE ENTERED: Please enter Z-LANG code to analyze.")]
    EmptyInput,
}
