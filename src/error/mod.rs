//! Centralized error handling for Strider
//! Defines the error kinds and codes shared by the engines

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Search pattern parsing or compilation errors
    Pattern,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => write!(f, "Pattern"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in Strider
///
/// Motions never surface these to their callers; any condition that
/// cannot resolve to a valid position resolves to "cursor unchanged".
/// The search engine still reports compile failures structurally so
/// library consumers can tell a bad pattern from an absent match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "REGEX_COMPILE_ERROR")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl EngineError {
    /// Create a new error
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

impl From<regex::Error> for EngineError {
    fn from(err: regex::Error) -> Self {
        Self::new(ErrorKind::Pattern, "REGEX_COMPILE_ERROR", err.to_string())
    }
}

/// Result alias for Strider operations
pub type Result<T> = std::result::Result<T, EngineError>;
