//! Static motion table
//!
//! Maps resolved key patterns and modes to motion variants. The full
//! motion set is known at compile time, so this is a plain static slice
//! rather than a runtime registry; the keystroke-to-pattern layer lives
//! outside this crate.

use super::{Direction, DocumentTarget, LineTarget, Motion, SearchTarget, WordTarget};
use crate::mode::Mode;

/// A single pattern → motion binding with its mode gate
#[derive(Debug, Clone, Copy)]
pub struct MotionBinding {
    pub pattern: &'static str,
    pub modes: &'static [Mode],
    pub motion: Motion,
}

const NORMAL_VISUAL: &[Mode] = &[Mode::Normal, Mode::Visual];

macro_rules! binding {
    ($pattern:literal, $motion:expr) => {
        MotionBinding {
            pattern: $pattern,
            modes: NORMAL_VISUAL,
            motion: $motion,
        }
    };
}

pub static MOTION_TABLE: &[MotionBinding] = &[
    // Directional steps
    binding!("h", Motion::Step(Direction::Left)),
    binding!("l", Motion::Step(Direction::Right)),
    binding!("j", Motion::Step(Direction::Down)),
    binding!("k", Motion::Step(Direction::Up)),
    // Word boundaries
    binding!("w", Motion::Word { target: WordTarget::NextStart, big_word: false }),
    binding!("W", Motion::Word { target: WordTarget::NextStart, big_word: true }),
    binding!("e", Motion::Word { target: WordTarget::End, big_word: false }),
    binding!("E", Motion::Word { target: WordTarget::End, big_word: true }),
    binding!("b", Motion::Word { target: WordTarget::PrevStart, big_word: false }),
    binding!("B", Motion::Word { target: WordTarget::PrevStart, big_word: true }),
    binding!("ge", Motion::Word { target: WordTarget::PrevEnd, big_word: false }),
    binding!("gE", Motion::Word { target: WordTarget::PrevEnd, big_word: true }),
    // Line-relative
    binding!("0", Motion::LineRelative(LineTarget::LineStart)),
    binding!("^", Motion::LineRelative(LineTarget::FirstNonBlank)),
    binding!("$", Motion::LineRelative(LineTarget::LineEnd)),
    // Document-relative
    binding!("gg", Motion::DocumentRelative(DocumentTarget::FirstLine)),
    binding!("G", Motion::DocumentRelative(DocumentTarget::LastLine)),
    // Search
    binding!("n", Motion::Search(SearchTarget::NextMatch)),
    binding!("N", Motion::Search(SearchTarget::PrevMatch)),
    binding!("*", Motion::Search(SearchTarget::WordForward)),
    binding!("#", Motion::Search(SearchTarget::WordBackward)),
    // Brackets
    binding!("%", Motion::BracketMatch),
];

/// Look up the binding for a pattern, gated on the current mode
pub fn lookup(pattern: &str, mode: Mode) -> Option<&'static MotionBinding> {
    MOTION_TABLE
        .iter()
        .find(|b| b.pattern == pattern && b.modes.contains(&mode))
}
