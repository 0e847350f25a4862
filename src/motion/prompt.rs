//! Interactive search pattern entry
//!
//! A sibling state machine to motion dispatch: it collects a pattern
//! after a forward/backward search key and is the sole place where the
//! Normal/Visual ⇄ SearchInput mode transitions happen. Confirming
//! commits the pattern into the session's [`SearchState`] and performs
//! one occurrence search in the recorded direction; cancelling discards
//! the pattern and leaves the search state untouched.

use super::MotionContext;
use crate::cursor::CursorPosition;
use crate::mode::Mode;
use crate::search::{self, SearchDirection, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptState {
    Idle,
    Collecting {
        direction: SearchDirection,
        pattern: String,
        caret: usize,
        return_mode: Mode,
    },
}

/// Search input prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPrompt {
    state: PromptState,
}

impl SearchPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PromptState::Idle,
        }
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self.state, PromptState::Collecting { .. })
    }

    /// The pattern collected so far, while collecting
    pub fn pattern(&self) -> Option<&str> {
        match &self.state {
            PromptState::Collecting { pattern, .. } => Some(pattern),
            PromptState::Idle => None,
        }
    }

    /// Caret position within the collected pattern, in chars
    pub fn caret(&self) -> Option<usize> {
        match &self.state {
            PromptState::Collecting { caret, .. } => Some(*caret),
            PromptState::Idle => None,
        }
    }

    /// Enter pattern collection; only fires from Normal or Visual mode
    pub fn begin(&mut self, ctx: &mut MotionContext<'_>, direction: SearchDirection) -> bool {
        if !matches!(ctx.mode, Mode::Normal | Mode::Visual) {
            return false;
        }
        self.state = PromptState::Collecting {
            direction,
            pattern: String::new(),
            caret: 0,
            return_mode: ctx.mode,
        };
        ctx.mode = Mode::SearchInput;
        true
    }

    /// Insert a character at the caret
    pub fn input_char(&mut self, c: char) {
        if let PromptState::Collecting { pattern, caret, .. } = &mut self.state {
            let byte = byte_index(pattern, *caret);
            pattern.insert(byte, c);
            *caret += 1;
        }
    }

    /// Remove the character before the caret
    pub fn backspace(&mut self) {
        if let PromptState::Collecting { pattern, caret, .. } = &mut self.state {
            if *caret > 0 {
                *caret -= 1;
                let byte = byte_index(pattern, *caret);
                pattern.remove(byte);
            }
        }
    }

    /// Discard the pattern; the search state is untouched
    pub fn cancel(&mut self, ctx: &mut MotionContext<'_>) {
        if let PromptState::Collecting { return_mode, .. } =
            std::mem::replace(&mut self.state, PromptState::Idle)
        {
            ctx.mode = return_mode;
        }
    }

    /// Commit the pattern and jump to the first occurrence
    ///
    /// Records {pattern, direction, match list} into the search state as
    /// a unit, then searches once in the recorded direction. An empty
    /// pattern behaves like a cancel; a malformed pattern is recorded
    /// but performs no search. Returns the new cursor on a hit.
    pub fn confirm(&mut self, ctx: &mut MotionContext<'_>, wrap: bool) -> Option<CursorPosition> {
        let PromptState::Collecting {
            direction,
            pattern,
            return_mode,
            ..
        } = std::mem::replace(&mut self.state, PromptState::Idle)
        else {
            return None;
        };

        ctx.mode = return_mode;
        if pattern.is_empty() {
            return None;
        }

        let query = SearchQuery::Pattern(pattern.clone());
        let matches = search::find_all(ctx.buffer, &query).unwrap_or_default();
        ctx.search.record(pattern, direction, matches);

        let hit = search::find_next(
            ctx.buffer,
            ctx.cursor.line(),
            ctx.cursor.column(),
            &query,
            direction,
            wrap,
        )
        .ok()
        .flatten()?;

        let index = ctx.search.matches().iter().position(|&m| m == hit);
        ctx.search.set_current(index);
        let next = ctx.cursor.with_line(hit.0).with_column(hit.1);
        ctx.cursor = next.clone();
        Some(next)
    }
}

impl Default for SearchPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte, _)| byte)
}
