//! Source Lines
//!
//! A borrowed view of one line of Z-LANG source and its classification.

/// Marker that turns the rest of a line into a comment
pub const COMMENT_MARKER: &str = "//";

/// Whitespace for trimming and word splitting
///
/// Unicode whitespace plus the byte-order mark, which editors and
/// `read_to_string` leave at the start of a file.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `text` without leading and trailing [`is_space`] characters
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Words of `text` separated by runs of [`is_space`] characters
pub fn split_space(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|word| !word.is_empty())
}

/// How a line participates in checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace
    Blank,
    /// Starts with `//` once leading whitespace is removed
    Comment,
    /// Anything else; subject to the rule battery
    Statement,
}

/// One line of source text with its 1-based number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub content: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, content: &'a str) -> Self {
        Self { number, content }
    }

    /// Content with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &'a str {
        trim_space(self.content)
    }

    pub fn kind(&self) -> LineKind {
        let trimmed = self.trimmed();
        if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with(COMMENT_MARKER) {
            LineKind::Comment
        } else {
            LineKind::Statement
        }
    }

    /// Whether the rule engine looks at this line at all
    pub fn is_eligible(&self) -> bool {
        self.kind() == LineKind::Statement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_blank() {
        assert_eq!(Line::new(1, "").kind(), LineKind::Blank);
        assert_eq!(Line::new(1, " \t \r").kind(), LineKind::Blank);
    }

    #[test]
    fn test_kind_comment() {
        assert_eq!(Line::new(1, "// note").kind(), LineKind::Comment);
        assert_eq!(Line::new(1, "    //indented").kind(), LineKind::Comment);
        // A single slash is not a comment
        assert_eq!(Line::new(1, "/ x").kind(), LineKind::Statement);
    }

    #[test]
    fn test_trailing_comment_is_still_a_statement() {
        let line = Line::new(3, "LETT x = 1; // trailing");
        assert_eq!(line.kind(), LineKind::Statement);
        assert!(line.is_eligible());
    }

    #[test]
    fn test_byte_order_mark_counts_as_space() {
        assert_eq!(Line::new(1, "\u{FEFF}").kind(), LineKind::Blank);
        assert_eq!(Line::new(1, "\u{FEFF}// header").kind(), LineKind::Comment);
        assert_eq!(Line::new(1, "\u{FEFF}Lett y 10;").trimmed(), "Lett y 10;");
        let words: Vec<_> = split_space("a\u{FEFF}b  c").collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trimmed_keeps_inner_whitespace() {
        let line = Line::new(1, "   LETT   x = 5;  \r");
        assert_eq!(line.trimmed(), "LETT   x = 5;");
        assert_eq!(line.content, "   LETT   x = 5;  \r");
    }
}
