//! Z-LANG Vocabulary
//!
//! Reserved words and built-in function names of the language. The rule
//! engine only relies on [`DECLARATION_KEYWORD`]; the full sets feed the
//! language server's hover and completion.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Keyword that opens a variable declaration
pub const DECLARATION_KEYWORD: &str = "LETT";

/// Reserved words, in alphabetical order as published
pub const KEYWORDS: [&str; 41] = [
    "ALIAS", "BLEND", "BOOL", "BOUNCE", "CAP", "CASE", "CORE", "DECI", "DOUBLE", "DROP", "ELSE",
    "EMOJI", "EMPTY", "ENUM", "FAM", "FIXED", "FOR", "GRAB", "IF", "IMPORT", "LENGTH", "LETT",
    "MAXI", "MINI", "MATIC", "NEXT", "NOCAP", "NORM", "NUMBS", "OUT", "SHADY", "SPILL", "STAY",
    "STRUCT", "SWIM", "SWITCH", "TAG", "TEXT", "VIBE", "WHILE", "ZAVED",
];

/// Built-in function names
pub const FUNCTIONS: [&str; 6] = ["avg", "ascending", "descending", "max", "min", "findString"];

pub static KEYWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.into_iter().collect());

pub static FUNCTION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FUNCTIONS.into_iter().collect());

/// Case-sensitive keyword lookup
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Case-sensitive built-in function lookup
pub fn is_function(word: &str) -> bool {
    FUNCTION_SET.contains(word)
}

/// What a word means to the language, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Keyword,
    Function,
}

pub fn classify_word(word: &str) -> Option<WordClass> {
    if is_keyword(word) {
        Some(WordClass::Keyword)
    } else if is_function(word) {
        Some(WordClass::Function)
    } else {
        None
    }
}
