//! Core domain types for the fragment puzzle.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identifies one displayable fragment slot (a button, in a graphical front end).
///
/// Slots are indices into [`LevelData::fragments`]. Two slots may carry the
/// same fragment text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct SlotId(usize);

impl SlotId {
    /// Creates a slot id from a 0-based index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the 0-based index of this slot.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A numbered clue as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_more::Display)]
#[display("{}. {}", number, text)]
pub struct Clue {
    /// 1-based display number, assigned after shuffling.
    number: usize,
    /// Clue text.
    text: String,
}

impl Clue {
    pub(crate) fn new(number: usize, text: String) -> Self {
        Self { number, text }
    }
}

/// One letter fragment in the level's pool.
///
/// Besides its text, a fragment remembers which solution it came from and
/// where in that solution it sits, so the pool can always be regrouped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Fragment {
    /// Fragment text, e.g. `UNT`.
    text: String,
    /// Index into [`LevelData::solutions`].
    solution: usize,
    /// Position of this fragment within its solution.
    part: usize,
}

impl Fragment {
    pub(crate) fn new(text: String, solution: usize, part: usize) -> Self {
        Self {
            text,
            solution,
            part,
        }
    }
}

/// A fully parsed and shuffled level.
///
/// Immutable once produced by [`load_level`](crate::load_level).
/// `clues[i]` and `solutions[i]` describe the same record.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LevelData {
    /// Clues in shuffled order, numbered from 1.
    clues: Vec<Clue>,
    /// Solution words with separators removed, in clue order.
    solutions: Vec<String>,
    /// Independently shuffled fragment pool; slot `i` shows `fragments[i]`.
    fragments: Vec<Fragment>,
}

impl LevelData {
    pub(crate) fn new(clues: Vec<Clue>, solutions: Vec<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            clues,
            solutions,
            fragments,
        }
    }

    /// Returns the fragment shown in a slot.
    pub fn fragment(&self, slot: SlotId) -> Option<&Fragment> {
        self.fragments.get(slot.index())
    }

    /// Returns the fragment texts in slot order.
    pub fn fragment_texts(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Returns the letter count of each solution, in clue order.
    pub fn solution_lengths(&self) -> Vec<usize> {
        self.solutions.iter().map(|s| s.chars().count()).collect()
    }

    /// Returns the slots holding the fragments of one solution, in spelling order.
    pub fn slots_for_solution(&self, solution: usize) -> Vec<SlotId> {
        let mut slots: Vec<(usize, SlotId)> = self
            .fragments
            .iter()
            .enumerate()
            .filter(|(_, f)| f.solution == solution)
            .map(|(i, f)| (f.part, SlotId::new(i)))
            .collect();
        slots.sort_unstable();
        slots.into_iter().map(|(_, slot)| slot).collect()
    }

    /// Number of solutions that must be found to complete the level.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

/// Formats a letter count the way the answers list shows unsolved entries.
pub fn letters_label(count: usize) -> String {
    format!("{} letters", count)
}
