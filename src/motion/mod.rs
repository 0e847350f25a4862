//! Motion execution contract
//!
//! Motions are grouped into a small set of categories. Each category
//! computes a candidate position from the engines (word boundaries,
//! brackets, search); a shared template validates the candidate and
//! commits it to the context only when valid. Anything that cannot
//! resolve to a valid position resolves to "cursor unchanged": a
//! silent no-op, never an error.
//!
//! ## Modules
//!
//! - [`table`] - Static pattern+mode → motion table
//! - [`prompt`] - Interactive search pattern entry

pub mod prompt;
pub mod table;

use crate::brackets;
use crate::buffer::TextBuffer;
use crate::cursor::CursorPosition;
use crate::mode::Mode;
use crate::movement::buffer as words;
use crate::search::{self, SearchDirection, SearchQuery, SearchState};

pub use table::{lookup, MotionBinding, MOTION_TABLE};

/// Single-step movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Word-boundary targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTarget {
    NextStart,
    End,
    PrevStart,
    PrevEnd,
}

/// Column formula for line-relative motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTarget {
    LineStart,
    FirstNonBlank,
    LineEnd,
}

/// Document edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentTarget {
    FirstLine,
    LastLine,
}

/// Search-based motions, driven by [`SearchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    /// Next occurrence in the recorded direction (n)
    NextMatch,
    /// Next occurrence against the recorded direction (N)
    PrevMatch,
    /// Word under the cursor, searching forward (*)
    WordForward,
    /// Word under the cursor, searching backward (#)
    WordBackward,
}

/// A motion, tagged by category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Single-column/single-line step (h, j, k, l)
    Step(Direction),
    /// Word/WORD boundary jump (w, b, e, ge and the WORD variants)
    Word { target: WordTarget, big_word: bool },
    /// Column formula on the current (or count-offset) line (0, ^, $)
    LineRelative(LineTarget),
    /// First/last line, or the 1-based line N with a count (gg, G)
    DocumentRelative(DocumentTarget),
    /// Occurrence search (n, N, *, #)
    Search(SearchTarget),
    /// Jump to the matching bracket (%)
    BracketMatch,
}

/// Declarative motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementConfig {
    /// Repeat count; `None` means no count was supplied, which is
    /// distinct from an explicit 1 (G vs. 1G)
    pub count: Option<usize>,
    /// Let searches continue from the opposite buffer edge
    pub allow_wrap: bool,
    pub scroll_on_edge: bool,
    pub visual_mode_enabled: bool,
}

impl MovementConfig {
    /// The repeat count, defaulting to one unit step
    pub fn step(&self) -> usize {
        self.count.unwrap_or(1)
    }

    /// Config carrying an explicit count
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            count: None,
            allow_wrap: true,
            scroll_on_edge: false,
            visual_mode_enabled: true,
        }
    }
}

/// Everything a motion reads, plus the state it may replace
///
/// One context belongs to one editing session. The buffer is only read;
/// the cursor and search state are replaced by successful motions.
pub struct MotionContext<'a> {
    pub buffer: &'a TextBuffer,
    pub mode: Mode,
    pub cursor: CursorPosition,
    pub search: SearchState,
}

impl<'a> MotionContext<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self {
            buffer,
            mode: Mode::Normal,
            cursor: CursorPosition::origin(),
            search: SearchState::new(),
        }
    }

    #[must_use]
    pub fn at(buffer: &'a TextBuffer, cursor: CursorPosition) -> Self {
        Self {
            cursor,
            ..Self::new(buffer)
        }
    }
}

/// Execute a motion against the context
///
/// Returns the committed cursor, or a value-equal clone of the original
/// when the motion resolves to a no-op. The context's cursor is
/// replaced only on a valid candidate.
pub fn execute(
    motion: &Motion,
    ctx: &mut MotionContext<'_>,
    config: &MovementConfig,
) -> CursorPosition {
    if ctx.buffer.is_empty() {
        return ctx.cursor.clone();
    }

    let candidate = match motion {
        Motion::Step(direction) => step_candidate(ctx, *direction, config),
        Motion::Word { target, big_word } => word_candidate(ctx, *target, *big_word),
        Motion::LineRelative(target) => line_candidate(ctx, *target, config),
        Motion::DocumentRelative(target) => document_candidate(ctx, *target, config),
        Motion::Search(target) => search_candidate(ctx, *target, config),
        Motion::BracketMatch => bracket_candidate(ctx),
    };

    match candidate.and_then(|c| validate(ctx.buffer, c)) {
        Some(next) => {
            ctx.cursor = next.clone();
            next
        }
        None => ctx.cursor.clone(),
    }
}

/// Dispatch a resolved key pattern, gating on the current mode
///
/// Unknown patterns and mode mismatches leave the cursor unchanged.
pub fn dispatch(
    pattern: &str,
    ctx: &mut MotionContext<'_>,
    config: &MovementConfig,
) -> CursorPosition {
    match table::lookup(pattern, ctx.mode) {
        Some(binding) => execute(&binding.motion, ctx, config),
        None => ctx.cursor.clone(),
    }
}

/// Clamp the line into the buffer and require the column to rest within
/// the target line (one past the last character is a valid rest)
fn validate(buffer: &TextBuffer, pos: CursorPosition) -> Option<CursorPosition> {
    let line = pos.line().min(buffer.line_count().saturating_sub(1));
    let len = buffer.line_len(line)?;
    let pos = if line == pos.line() {
        pos
    } else {
        pos.with_line(line)
    };
    (pos.column() <= len).then_some(pos)
}

/// Vertical landing: preserve the desired column, clamp the real one
fn vertical_to(buffer: &TextBuffer, cursor: &CursorPosition, line: usize) -> Option<CursorPosition> {
    let len = buffer.line_len(line)?;
    let column = cursor.desired_column().min(len);
    Some(
        cursor
            .with_line(line)
            .with_column_and_desired(column, cursor.desired_column()),
    )
}

fn step_candidate(
    ctx: &MotionContext<'_>,
    direction: Direction,
    config: &MovementConfig,
) -> Option<CursorPosition> {
    let cursor = &ctx.cursor;
    let step = config.step();
    match direction {
        Direction::Left => Some(cursor.with_column(cursor.column().saturating_sub(step))),
        Direction::Right => {
            let len = ctx.buffer.line_len(cursor.line())?;
            Some(cursor.with_column((cursor.column() + step).min(len)))
        }
        Direction::Up => vertical_to(ctx.buffer, cursor, cursor.line().saturating_sub(step)),
        Direction::Down => {
            let last = ctx.buffer.line_count() - 1;
            vertical_to(ctx.buffer, cursor, (cursor.line() + step).min(last))
        }
    }
}

/// One boundary jump per invocation; the repeat count is reserved
fn word_candidate(
    ctx: &MotionContext<'_>,
    target: WordTarget,
    big_word: bool,
) -> Option<CursorPosition> {
    let (line, col) = (ctx.cursor.line(), ctx.cursor.column());
    let (l, c) = match target {
        WordTarget::NextStart => words::next_word_start(ctx.buffer, line, col, big_word),
        WordTarget::End => words::word_end(ctx.buffer, line, col, big_word),
        WordTarget::PrevStart => words::prev_word_start(ctx.buffer, line, col, big_word),
        WordTarget::PrevEnd => words::prev_word_end(ctx.buffer, line, col, big_word),
    }?;
    Some(ctx.cursor.with_line(l).with_column(c))
}

fn line_candidate(
    ctx: &MotionContext<'_>,
    target: LineTarget,
    config: &MovementConfig,
) -> Option<CursorPosition> {
    let step = config.step();
    // A count N means: N-1 lines down, then the column rule there
    let line = if step > 1 {
        (ctx.cursor.line() + step - 1).min(ctx.buffer.line_count() - 1)
    } else {
        ctx.cursor.line()
    };
    let text = ctx.buffer.line(line)?;
    let len = text.chars().count();
    let column = match target {
        LineTarget::LineStart => 0,
        LineTarget::FirstNonBlank => text.chars().position(|c| !c.is_whitespace()).unwrap_or(0),
        LineTarget::LineEnd => len.saturating_sub(1),
    };
    Some(ctx.cursor.with_line(line).with_column(column))
}

fn document_candidate(
    ctx: &MotionContext<'_>,
    target: DocumentTarget,
    config: &MovementConfig,
) -> Option<CursorPosition> {
    let last = ctx.buffer.line_count() - 1;
    let line = match config.count {
        // An explicit count is a 1-based line number; 0 degenerates to
        // the unprefixed jump
        Some(n) if n > 0 => (n - 1).min(last),
        _ => match target {
            DocumentTarget::FirstLine => 0,
            DocumentTarget::LastLine => last,
        },
    };
    vertical_to(ctx.buffer, &ctx.cursor, line)
}

fn bracket_candidate(ctx: &MotionContext<'_>) -> Option<CursorPosition> {
    let result = brackets::match_bracket(ctx.buffer, ctx.cursor.line(), ctx.cursor.column());
    result
        .found
        .then(|| ctx.cursor.with_line(result.line).with_column(result.column))
}

/// Search motions do not consume the count; direction comes from the
/// persisted search state
fn search_candidate(
    ctx: &mut MotionContext<'_>,
    target: SearchTarget,
    config: &MovementConfig,
) -> Option<CursorPosition> {
    let (line, col) = (ctx.cursor.line(), ctx.cursor.column());

    let hit = match target {
        SearchTarget::NextMatch | SearchTarget::PrevMatch => {
            let pattern = ctx.search.pattern()?.to_string();
            let recorded = ctx.search.direction()?;
            let direction = match target {
                SearchTarget::NextMatch => recorded,
                _ => recorded.reversed(),
            };
            let query = SearchQuery::Pattern(pattern);
            search::find_next(ctx.buffer, line, col, &query, direction, config.allow_wrap)
                .ok()
                .flatten()?
        }
        SearchTarget::WordForward | SearchTarget::WordBackward => {
            let word = words::word_under_cursor(ctx.buffer, line, col)?;
            let pattern = search::whole_word_pattern(&word);
            let direction = match target {
                SearchTarget::WordForward => SearchDirection::Forward,
                _ => SearchDirection::Backward,
            };
            let query = SearchQuery::Pattern(pattern.clone());
            let matches = search::find_all(ctx.buffer, &query).ok()?;
            ctx.search.record(pattern, direction, matches);
            search::find_next(ctx.buffer, line, col, &query, direction, config.allow_wrap)
                .ok()
                .flatten()?
        }
    };

    let index = ctx.search.matches().iter().position(|&m| m == hit);
    ctx.search.set_current(index);
    Some(ctx.cursor.with_line(hit.0).with_column(hit.1))
}
