//! Movement semantics for word and WORD navigation
//!
//! This module centralizes the logic for determining word boundaries
//! across the buffer.
//!
//! ## Design
//!
//! Movement is based on character categories:
//! - **Whitespace**: spaces, tabs, newlines
//! - **Alphanumeric**: letters, numbers, and underscore
//! - **Symbol**: all other characters (punctuation, operators, etc.)
//!
//! "word" motions treat alphanumeric runs and symbol runs as distinct
//! tokens, so `foo->bar` is THREE words: `foo`, `->`, `bar`. "WORD"
//! motions treat any maximal non-whitespace run as one token, so
//! `foo->bar` is ONE WORD.
//!
//! ## Modules
//!
//! - [`classify`] - Character classification functions
//! - [`boundaries`] - Per-line boundary scans
//! - [`buffer`] - Buffer-level movement with multi-line continuation

pub mod boundaries;
pub mod buffer;
pub mod classify;

// Re-export commonly used types
pub use classify::{classify_char, is_word_char, CharClass};

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
