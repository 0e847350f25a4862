//! Cursor position value type
//!
//! A [`CursorPosition`] is an immutable (line, column) pair plus the
//! "desired column" that vertical movement tries to return to after
//! passing through lines too short to hold it. Every transform produces
//! a new value; nothing mutates in place.

/// A caret location in a line buffer
///
/// `column` is the clamped, on-screen column. `desired_column` is the
/// column vertical motion is aiming for, preserved across intermediate
/// clamps. Horizontal motions reset `desired_column` to `column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPosition {
    line: usize,
    column: usize,
    desired_column: usize,
}

impl CursorPosition {
    /// Create a cursor at (line, column) with `desired_column = column`
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: column,
        }
    }

    /// Cursor at the top of the document
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn desired_column(&self) -> usize {
        self.desired_column
    }

    /// Replace the line, keeping column and desired column
    #[must_use]
    pub fn with_line(&self, line: usize) -> Self {
        Self { line, ..*self }
    }

    /// Replace the column, resetting `desired_column = column`
    #[must_use]
    pub fn with_column(&self, column: usize) -> Self {
        Self {
            column,
            desired_column: column,
            ..*self
        }
    }

    /// Replace column and desired column independently (vertical motion)
    #[must_use]
    pub fn with_column_and_desired(&self, column: usize, desired_column: usize) -> Self {
        Self {
            column,
            desired_column,
            ..*self
        }
    }

    /// One column left, clamped at zero
    #[must_use]
    pub fn moved_left(&self) -> Self {
        self.with_column(self.column.saturating_sub(1))
    }

    /// One column right
    #[must_use]
    pub fn moved_right(&self) -> Self {
        self.with_column(self.column + 1)
    }

    /// One line up, clamped at zero; column and desired column kept
    #[must_use]
    pub fn moved_up(&self) -> Self {
        self.with_line(self.line.saturating_sub(1))
    }

    /// One line down; column and desired column kept
    #[must_use]
    pub fn moved_down(&self) -> Self {
        self.with_line(self.line + 1)
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::origin()
    }
}
