//! Buffer-level word movement
//!
//! Multi-line continuation over the per-line scans in [`super::boundaries`].
//! When a per-line scan comes up empty, these functions advance to the
//! next line (forward) or previous line (backward) and retry in rolling
//! mode at column 0 / the last column.
//!
//! Blank lines: a start-seeking scan skips a blank line whenever a
//! further token exists in the scan direction, and lands on the blank
//! line (column 0) only as the final stop before the buffer edge.
//! Whitespace-only lines and end-seeking scans never land on blanks.

use super::boundaries;
use crate::buffer::TextBuffer;

/// Start of the next word/WORD token after (line, col)
pub fn next_word_start(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
    big_word: bool,
) -> Option<(usize, usize)> {
    let text = buffer.line(line)?;
    if let Some(c) = boundaries::next_token_start(text, col, big_word, false) {
        return Some((line, c));
    }

    let mut blank = None;
    for l in (line + 1)..buffer.line_count() {
        let Some(text) = buffer.line(l) else { break };
        if text.is_empty() {
            if blank.is_none() {
                blank = Some(l);
            }
            continue;
        }
        if let Some(c) = boundaries::next_token_start(text, 0, big_word, true) {
            return Some((l, c));
        }
    }

    blank.map(|l| (l, 0))
}

/// End of the current or next word/WORD token
pub fn word_end(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
    big_word: bool,
) -> Option<(usize, usize)> {
    let text = buffer.line(line)?;
    if let Some(c) = boundaries::token_end(text, col, big_word, false) {
        return Some((line, c));
    }

    for l in (line + 1)..buffer.line_count() {
        let Some(text) = buffer.line(l) else { break };
        if let Some(c) = boundaries::token_end(text, 0, big_word, true) {
            return Some((l, c));
        }
    }

    None
}

/// Start of the word/WORD token before (line, col)
pub fn prev_word_start(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
    big_word: bool,
) -> Option<(usize, usize)> {
    let text = buffer.line(line)?;
    if let Some(c) = boundaries::prev_token_start(text, col, big_word, false) {
        return Some((line, c));
    }

    let mut blank = None;
    for l in (0..line).rev() {
        let Some(text) = buffer.line(l) else { continue };
        if text.is_empty() {
            if blank.is_none() {
                blank = Some(l);
            }
            continue;
        }
        let last = text.chars().count() - 1;
        if let Some(c) = boundaries::prev_token_start(text, last, big_word, true) {
            return Some((l, c));
        }
    }

    blank.map(|l| (l, 0))
}

/// End of the word/WORD token before (line, col) ("ge"/"gE")
pub fn prev_word_end(
    buffer: &TextBuffer,
    line: usize,
    col: usize,
    big_word: bool,
) -> Option<(usize, usize)> {
    let text = buffer.line(line)?;
    if let Some(c) = boundaries::prev_token_end(text, col, big_word, false) {
        return Some((line, c));
    }

    for l in (0..line).rev() {
        let Some(text) = buffer.line(l) else { continue };
        let len = text.chars().count();
        if len == 0 {
            continue;
        }
        if let Some(c) = boundaries::prev_token_end(text, len - 1, big_word, true) {
            return Some((l, c));
        }
    }

    None
}

/// Word token under the cursor, if the cursor sits on a word character
pub fn word_under_cursor(buffer: &TextBuffer, line: usize, col: usize) -> Option<String> {
    let text = buffer.line(line)?;
    let (start, end) = boundaries::token_range(text, col)?;
    Some(text.chars().skip(start).take(end - start).collect())
}
