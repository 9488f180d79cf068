/// State for each open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
    pub version: i32,
}

impl DocumentState {
    pub fn new(content: String, version: i32) -> Self {
        Self { content, version }
    }

    /// Text of a 0-based line, using the same `'\n'` split as the scanner
    pub fn line(&self, line_idx: usize) -> Option<&str> {
        self.content.split('\n').nth(line_idx)
    }

    /// Word under the cursor (letters, digits, underscore)
    ///
    /// `character` is an LSP position: a UTF-16 code unit offset.
    pub fn word_at(&self, line_idx: usize, character: usize) -> Option<&str> {
        let line = self.line(line_idx)?;
        let cursor = utf16_to_byte(line, character);
        let start = word_start(line, cursor);
        let end = word_end(line, cursor);
        (start < end).then(|| &line[start..end])
    }

    /// Word fragment ending at the cursor, used for completion
    pub fn prefix_at(&self, line_idx: usize, character: usize) -> &str {
        let Some(line) = self.line(line_idx) else {
            return "";
        };
        let cursor = utf16_to_byte(line, character);
        &line[word_start(line, cursor)..cursor]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offset of a UTF-16 column, clamped to the line end
///
/// A column inside a surrogate pair moves to the end of that character.
fn utf16_to_byte(line: &str, character: usize) -> usize {
    let mut units = 0;
    for (idx, c) in line.char_indices() {
        if units >= character {
            return idx;
        }
        units += c.len_utf16();
    }
    line.len()
}

/// Start of the word run ending at byte `cursor`
fn word_start(line: &str, cursor: usize) -> usize {
    line[..cursor]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(cursor, |(idx, _)| idx)
}

/// End of the word run starting at byte `cursor`
fn word_end(line: &str, cursor: usize) -> usize {
    line[cursor..]
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(line.len(), |(idx, _)| cursor + idx)
}
