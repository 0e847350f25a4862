//! Bracket matching
//!
//! Depth-tracked scan for the matching bracket of the four pair types
//! `()`, `[]`, `{}`, `<>`. Depth bookkeeping is type-specific: a `(`
//! inside `[...]` does not affect `[]` depth. Scans cross line
//! boundaries and run to the buffer edge; an unmatched bracket yields
//! not-found, never a partial match.

use crate::buffer::TextBuffer;

/// A bracket pair type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

/// The four pair types recognized by the matcher
pub const BRACKET_PAIRS: [BracketPair; 4] = [
    BracketPair { open: '(', close: ')' },
    BracketPair { open: '[', close: ']' },
    BracketPair { open: '{', close: '}' },
    BracketPair { open: '<', close: '>' },
];

/// Outcome of a bracket or search primitive
///
/// `found = false` carries the original position, never a sentinel, so
/// callers can tell "stayed because nothing matched" from "stayed
/// because the match is the current position".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub line: usize,
    pub column: usize,
    pub found: bool,
}

impl MatchResult {
    /// A successful match at (line, column)
    #[must_use]
    pub fn found_at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            found: true,
        }
    }

    /// No match; carries the original position
    #[must_use]
    pub fn unmatched(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            found: false,
        }
    }
}

fn pair_for(c: char) -> Option<(BracketPair, bool)> {
    BRACKET_PAIRS.iter().find_map(|p| {
        if p.open == c {
            Some((*p, true))
        } else if p.close == c {
            Some((*p, false))
        } else {
            None
        }
    })
}

/// Find the bracket matching the one at (or after) the cursor
///
/// On an opening bracket: scan forward for the closing bracket at the
/// same nesting depth. On a closing bracket: the symmetric backward
/// scan. On any other character: seek forward for the first bracket of
/// either direction and resolve from there.
pub fn match_bracket(buffer: &TextBuffer, line: usize, column: usize) -> MatchResult {
    let origin = MatchResult::unmatched(line, column);
    if buffer.is_empty() {
        return origin;
    }

    let under = buffer.char_at(line, column).and_then(pair_for);
    let (bracket_line, bracket_col, pair, is_open) = match under {
        Some((pair, is_open)) => (line, column, pair, is_open),
        None => match seek_bracket(buffer, line, column) {
            Some(hit) => hit,
            None => return origin,
        },
    };

    let target = if is_open {
        scan_forward(buffer, pair, bracket_line, bracket_col)
    } else {
        scan_backward(buffer, pair, bracket_line, bracket_col)
    };

    match target {
        Some((l, c)) => MatchResult::found_at(l, c),
        None => origin,
    }
}

/// First bracket character of either direction at or after (line, col)
fn seek_bracket(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
) -> Option<(usize, usize, BracketPair, bool)> {
    let mut start = col;
    for l in line..buffer.line_count() {
        if let Some(text) = buffer.line(l) {
            for (i, c) in text.chars().enumerate().skip(start) {
                if let Some((pair, is_open)) = pair_for(c) {
                    return Some((l, i, pair, is_open));
                }
            }
        }
        start = 0;
    }
    None
}

/// Forward scan for the closing bracket, starting at depth 1 strictly
/// after (line, col)
fn scan_forward(
    buffer: &TextBuffer,
    pair: BracketPair,
    line: usize,
    col: usize,
) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut start = col + 1;
    for l in line..buffer.line_count() {
        if let Some(text) = buffer.line(l) {
            for (i, c) in text.chars().enumerate().skip(start) {
                if c == pair.open {
                    depth += 1;
                } else if c == pair.close {
                    depth -= 1;
                    if depth == 0 {
                        return Some((l, i));
                    }
                }
            }
        }
        start = 0;
    }
    None
}

/// Backward scan for the opening bracket, starting at depth 1 strictly
/// before (line, col)
fn scan_backward(
    buffer: &TextBuffer,
    pair: BracketPair,
    line: usize,
    col: usize,
) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut end = col;
    let mut l = line;
    loop {
        if let Some(text) = buffer.line(l) {
            let chars: Vec<char> = text.chars().collect();
            for i in (0..end.min(chars.len())).rev() {
                if chars[i] == pair.close {
                    depth += 1;
                } else if chars[i] == pair.open {
                    depth -= 1;
                    if depth == 0 {
                        return Some((l, i));
                    }
                }
            }
        }
        if l == 0 {
            return None;
        }
        l -= 1;
        end = usize::MAX;
    }
}
