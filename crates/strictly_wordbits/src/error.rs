//! Error types for level loading and fragment taps.

use crate::types::SlotId;
use serde::{Deserialize, Serialize};

/// Why a level record could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FormatIssue {
    /// The line has no `": "` between answer and clue.
    #[display("missing \": \" separator")]
    MissingSeparator,
    /// The line has more than one `": "`.
    #[display("more than one \": \" separator")]
    ExtraSeparator,
    /// The answer segment is empty.
    #[display("answer has no fragments")]
    NoFragments,
    /// Two `|` are adjacent, or the answer starts or ends with `|`.
    #[display("answer contains an empty fragment")]
    EmptyFragment,
    /// The level text contains no records at all.
    #[display("level contains no records")]
    NoRecords,
}

/// Error produced while loading or advancing to a level.
///
/// A failed load never touches the session that requested it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LevelError {
    /// A record in the level text is malformed.
    #[display("Level line {}: {}", line, issue)]
    Format {
        /// 1-based line number in the unshuffled text.
        line: usize,
        /// What is wrong with it.
        issue: FormatIssue,
    },

    /// The level has a different number of fragments than there are slots.
    #[display("Level has {} fragments but {} slots are available", found, expected)]
    SlotCountMismatch {
        /// Slots the caller can display.
        expected: usize,
        /// Fragments the level text produced.
        found: usize,
    },

    /// No level text exists for this level number.
    #[display("Level {} not found", level)]
    NotFound {
        /// The level number that was requested.
        level: u32,
    },

    /// Level text exists but could not be read.
    #[display("Level {} could not be read: {}", level, reason)]
    Unreadable {
        /// The level number that was requested.
        level: u32,
        /// Why reading failed.
        reason: String,
    },
}

impl std::error::Error for LevelError {}

/// Error returned when a fragment slot cannot be tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TapError {
    /// The slot does not exist in the current level.
    #[display("Slot {} does not exist", _0)]
    UnknownSlot(SlotId),

    /// The slot is already part of the answer or was spent on a solved word.
    #[display("Slot {} is not available", _0)]
    SlotConsumed(SlotId),
}

impl std::error::Error for TapError {}
