//! Search functionality
//!
//! Implements occurrence search over the buffer with vim-style
//! wraparound. Supports:
//! - Literal substring and regex pattern queries (one shared traversal)
//! - Forward and backward search
//! - Whole-word patterns for cursor-word lookups
//!
//! Positions are (line, column) pairs in char indices. Malformed
//! patterns surface as a structured [`EngineError`]; empty queries mean
//! "no search performed" and resolve to `Ok(None)`.

use crate::buffer::TextBuffer;
use crate::error::{EngineError, Result};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// A search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Plain substring match
    Literal(String),
    /// Regular-expression match
    Pattern(String),
}

/// Last-search memory, persisted across motions within a session
///
/// The fields are recorded and cleared together, never partially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pattern: Option<String>,
    direction: Option<SearchDirection>,
    matches: Vec<(usize, usize)>,
    current: Option<usize>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn direction(&self) -> Option<SearchDirection> {
        self.direction
    }

    /// All occurrence positions of the committed pattern, in buffer order
    pub fn matches(&self) -> &[(usize, usize)] {
        &self.matches
    }

    /// Index into [`Self::matches`] of the occurrence the cursor sits on
    pub fn current_match(&self) -> Option<usize> {
        self.current
    }

    /// Record a committed search, replacing every field
    pub fn record(
        &mut self,
        pattern: String,
        direction: SearchDirection,
        matches: Vec<(usize, usize)>,
    ) {
        self.pattern = Some(pattern);
        self.direction = Some(direction);
        self.matches = matches;
        self.current = None;
    }

    pub fn set_current(&mut self, index: Option<usize>) {
        self.current = index;
    }

    /// Clear the whole state at once
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

enum Matcher {
    Literal(Vec<char>),
    Pattern(Regex),
}

impl Matcher {
    /// Compile a query. Empty queries yield `Ok(None)` ("no search
    /// performed"); malformed patterns yield a structured error.
    fn compile(query: &SearchQuery) -> Result<Option<Self>> {
        match query {
            SearchQuery::Literal(s) if s.is_empty() => Ok(None),
            SearchQuery::Literal(s) => Ok(Some(Self::Literal(s.chars().collect()))),
            SearchQuery::Pattern(p) if p.is_empty() => Ok(None),
            SearchQuery::Pattern(p) => match Regex::new(p) {
                Ok(re) => Ok(Some(Self::Pattern(re))),
                Err(err) => Err(EngineError::from(err)),
            },
        }
    }

    /// Match start columns on one line, ascending, in char indices
    ///
    /// Zero-width regex matches cannot stall the scan: `find_iter`
    /// advances past empty matches on its own.
    fn matches_in(&self, line: &str) -> Vec<usize> {
        match self {
            Self::Literal(needle) => {
                let hay: Vec<char> = line.chars().collect();
                let n = needle.len();
                if n == 0 || hay.len() < n {
                    return Vec::new();
                }
                (0..=hay.len() - n)
                    .filter(|&i| hay[i..i + n] == needle[..])
                    .collect()
            }
            Self::Pattern(re) => re
                .find_iter(line)
                .map(|m| line[..m.start()].chars().count())
                .collect(),
        }
    }
}

/// Find the next occurrence of `query` relative to (line, col)
///
/// Forward: the remainder of the current line strictly after `col`, then
/// subsequent lines, then (with `wrap`) the top of the buffer back to
/// the prefix of the original line up to `col` inclusive. Backward is
/// the mirror.
pub fn find_next(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
    query: &SearchQuery,
    direction: SearchDirection,
    wrap: bool,
) -> Result<Option<(usize, usize)>> {
    let Some(matcher) = Matcher::compile(query)? else {
        return Ok(None);
    };
    if buffer.is_empty() {
        return Ok(None);
    }
    let line = line.min(buffer.line_count() - 1);

    Ok(match direction {
        SearchDirection::Forward => forward(buffer, &matcher, line, col, wrap),
        SearchDirection::Backward => backward(buffer, &matcher, line, col, wrap),
    })
}

/// All occurrences in buffer order
pub fn find_all(buffer: &TextBuffer, query: &SearchQuery) -> Result<Vec<(usize, usize)>> {
    let Some(matcher) = Matcher::compile(query)? else {
        return Ok(Vec::new());
    };

    let mut positions = Vec::new();
    for l in 0..buffer.line_count() {
        if let Some(text) = buffer.line(l) {
            positions.extend(matcher.matches_in(text).into_iter().map(|c| (l, c)));
        }
    }
    Ok(positions)
}

/// Build a whole-word pattern for a cursor-word lookup
///
/// Escapes every character with special meaning and wraps the literal in
/// word-boundary assertions on both sides.
#[must_use]
pub fn whole_word_pattern(word: &str) -> String {
    format!(r"\b{}\b", regex::escape(word))
}

fn forward(
    buffer: &TextBuffer,
    matcher: &Matcher,
    line: usize,
    col: usize,
    wrap: bool,
) -> Option<(usize, usize)> {
    // 1. Remainder of the current line, strictly after the cursor
    if let Some(text) = buffer.line(line) {
        if let Some(c) = matcher.matches_in(text).into_iter().find(|&c| c > col) {
            return Some((line, c));
        }
    }

    // 2. Subsequent lines
    for l in (line + 1)..buffer.line_count() {
        if let Some(text) = buffer.line(l) {
            if let Some(&c) = matcher.matches_in(text).first() {
                return Some((l, c));
            }
        }
    }

    if !wrap {
        return None;
    }

    // 3. Wrap to the top of the buffer
    for l in 0..line {
        if let Some(text) = buffer.line(l) {
            if let Some(&c) = matcher.matches_in(text).first() {
                return Some((l, c));
            }
        }
    }

    // 4. Prefix of the original line up to the cursor, inclusive
    if let Some(text) = buffer.line(line) {
        if let Some(c) = matcher.matches_in(text).into_iter().find(|&c| c <= col) {
            return Some((line, c));
        }
    }

    None
}

fn backward(
    buffer: &TextBuffer,
    matcher: &Matcher,
    line: usize,
    col: usize,
    wrap: bool,
) -> Option<(usize, usize)> {
    // 1. Current line, strictly before the cursor
    if let Some(text) = buffer.line(line) {
        if let Some(c) = matcher.matches_in(text).into_iter().rev().find(|&c| c < col) {
            return Some((line, c));
        }
    }

    // 2. Prior lines in reverse
    for l in (0..line).rev() {
        if let Some(text) = buffer.line(l) {
            if let Some(&c) = matcher.matches_in(text).last() {
                return Some((l, c));
            }
        }
    }

    if !wrap {
        return None;
    }

    // 3. Wrap to the bottom, back down to just after the original line
    for l in ((line + 1)..buffer.line_count()).rev() {
        if let Some(text) = buffer.line(l) {
            if let Some(&c) = matcher.matches_in(text).last() {
                return Some((l, c));
            }
        }
    }

    // 4. Suffix of the original line at or after the cursor
    if let Some(text) = buffer.line(line) {
        if let Some(c) = matcher.matches_in(text).into_iter().rev().find(|&c| c >= col) {
            return Some((line, c));
        }
    }

    None
}
