//! Strider - a vim-compatible text motion engine
//!
//! Pure positional reasoning: given a cursor, a line buffer, a mode, and
//! an optional repeat count, compute the next cursor position for a
//! named motion (word/WORD jumps, bracket matching, line-relative and
//! document jumps, pattern search). No text mutation, no rendering, no
//! I/O; every motion either commits a validated position or leaves the
//! cursor unchanged.

pub mod brackets;
pub mod buffer;
pub mod cursor;
pub mod error;
pub mod mode;
pub mod motion;
pub mod movement;
pub mod search;

pub use brackets::{match_bracket, BracketPair, MatchResult, BRACKET_PAIRS};
pub use buffer::TextBuffer;
pub use cursor::CursorPosition;
pub use error::{EngineError, ErrorKind};
pub use mode::Mode;
pub use motion::prompt::SearchPrompt;
pub use motion::{
    dispatch, execute, lookup, Direction, DocumentTarget, LineTarget, Motion, MotionContext,
    MovementConfig, SearchTarget, WordTarget,
};
pub use search::{SearchDirection, SearchQuery, SearchState};
