//! Line-oriented text buffer
//!
//! A [`TextBuffer`] holds the document as a sequence of line strings with
//! no embedded newlines. Motions read it; they never mutate it.
//!
//! Zero lines means an empty document, which is distinct from a document
//! holding a single empty line. Columns and line lengths are counted in
//! `char`s, not bytes.

/// Ordered document content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// An empty document (zero lines)
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a buffer from pre-split lines
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a buffer by splitting `text` on line breaks
    ///
    /// A single trailing empty segment produced by a trailing terminator
    /// is not treated as an extra line: `"a\n"` is one line, `"a\n\n"`
    /// is two.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the document holds zero lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or absent when out of range. Never panics.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Char count of the line at `index`, absent when out of range
    pub fn line_len(&self, index: usize) -> Option<usize> {
        self.line(index).map(|l| l.chars().count())
    }

    /// Character at (line, column), counted in chars
    pub fn char_at(&self, line: usize, column: usize) -> Option<char> {
        self.line(line)?.chars().nth(column)
    }

    /// Full content joined by line breaks
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the full content (used by non-motion editing layers)
    pub fn replace_text(&mut self, text: &str) {
        *self = Self::from_text(text);
    }
}
