//! Per-line word boundary scans
//!
//! All functions here look at a single line and return a column, or
//! `None` when the requested boundary does not exist on that line.
//! Multi-line continuation is the caller's job ([`super::buffer`]).
//!
//! The `rolling` switch makes a scan treat its starting character as a
//! candidate answer instead of requiring forward progress first. It is
//! used by multi-line continuation, which enters a fresh line at column
//! 0 (forward) or the last column (backward).

use super::classify::{classify_char, token_class, CharClass};

fn class_at(chars: &[char], idx: usize, big_word: bool) -> CharClass {
    token_class(chars[idx], big_word)
}

/// Find the start of the token after the one under `col`
///
/// From a token, skips to its end and over whitespace; from whitespace,
/// skips the whitespace. Returns the first column of the next token.
///
/// # Arguments
/// * `line` - The line to scan
/// * `col` - Starting column (char index)
/// * `big_word` - WORD semantics (whitespace is the only separator)
/// * `rolling` - Accept the starting character itself as an answer
pub fn next_token_start(line: &str, col: usize, big_word: bool, rolling: bool) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    if col >= len {
        return None;
    }

    let mut pos = col;
    let start_class = class_at(&chars, pos, big_word);
    if rolling && start_class != CharClass::Whitespace {
        return Some(pos);
    }

    // 1. Skip the current token
    if start_class != CharClass::Whitespace {
        while pos < len && class_at(&chars, pos, big_word) == start_class {
            pos += 1;
        }
    }

    // 2. Skip whitespace to the next token
    while pos < len && class_at(&chars, pos, big_word) == CharClass::Whitespace {
        pos += 1;
    }

    (pos < len).then_some(pos)
}

/// Find the end of the current or next token
///
/// Mid-token, this is the last column of the current token; on a token's
/// last character (or on whitespace), it is the last column of the next
/// token.
pub fn token_end(line: &str, col: usize, big_word: bool, rolling: bool) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut pos = if rolling { col } else { col + 1 };
    if pos >= len {
        return None;
    }

    // 1. Skip whitespace to the next token
    while pos < len && class_at(&chars, pos, big_word) == CharClass::Whitespace {
        pos += 1;
    }
    if pos >= len {
        return None;
    }

    // 2. Run to the end of that token
    let class = class_at(&chars, pos, big_word);
    while pos + 1 < len && class_at(&chars, pos + 1, big_word) == class {
        pos += 1;
    }

    Some(pos)
}

/// Find the start of the token before `col`
///
/// Skips whitespace backward, then backs up through the run whose class
/// matches the landing character.
pub fn prev_token_start(line: &str, col: usize, big_word: bool, rolling: bool) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    if len == 0 {
        return None;
    }
    let mut pos = if rolling {
        col.min(len - 1)
    } else {
        if col == 0 {
            return None;
        }
        (col - 1).min(len - 1)
    };

    // 1. Skip whitespace backwards
    while pos > 0 && class_at(&chars, pos, big_word) == CharClass::Whitespace {
        pos -= 1;
    }
    if class_at(&chars, pos, big_word) == CharClass::Whitespace {
        return None;
    }

    // 2. Back up to the start of the landing token
    let class = class_at(&chars, pos, big_word);
    while pos > 0 && class_at(&chars, pos - 1, big_word) == class {
        pos -= 1;
    }

    Some(pos)
}

/// Find the end of the token before the one under `col` ("ge"/"gE")
///
/// From inside a token, backs out of the token's run first; from
/// whitespace, only the whitespace is skipped. The answer is the column
/// landed on, i.e. the last character of the previous token.
pub fn prev_token_end(line: &str, col: usize, big_word: bool, rolling: bool) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    if len == 0 {
        return None;
    }
    let mut pos = col.min(len - 1);

    if !rolling && class_at(&chars, pos, big_word) != CharClass::Whitespace {
        // 1. Back out of the current token's run
        let start_class = class_at(&chars, pos, big_word);
        while pos > 0 && class_at(&chars, pos, big_word) == start_class {
            pos -= 1;
        }
        if class_at(&chars, pos, big_word) == start_class {
            // The run reaches the line start; no previous token here
            return None;
        }
    }

    // 2. Skip whitespace backwards
    while pos > 0 && class_at(&chars, pos, big_word) == CharClass::Whitespace {
        pos -= 1;
    }

    (class_at(&chars, pos, big_word) != CharClass::Whitespace).then_some(pos)
}

/// Half-open char range of the word token enclosing `col`
///
/// Fails when the character under `col` is not a word character; symbol
/// and whitespace runs are not word tokens for cursor-word extraction.
pub fn token_range(line: &str, col: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    if col >= chars.len() || classify_char(chars[col]) != CharClass::Alphanumeric {
        return None;
    }

    let mut start = col;
    while start > 0 && classify_char(chars[start - 1]) == CharClass::Alphanumeric {
        start -= 1;
    }
    let mut end = col;
    while end + 1 < chars.len() && classify_char(chars[end + 1]) == CharClass::Alphanumeric {
        end += 1;
    }

    Some((start, end + 1))
}
