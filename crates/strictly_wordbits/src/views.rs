//! Read-only views for the presentation layer.
//!
//! The engine never pushes to a display. Front ends poll these after each
//! call and render whatever they get back.

use crate::outcome::SessionPhase;
use crate::session::PuzzleSession;
use crate::types::{SlotId, letters_label};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// What a front end needs to draw one slot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SlotView {
    /// Slot identifier.
    id: SlotId,
    /// Fragment text shown on the slot.
    text: String,
    /// Whether the slot is shown and tappable.
    visible: bool,
}

/// A serializable picture of the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SessionSnapshot {
    /// Current level number.
    level: u32,
    /// Score so far.
    score: u32,
    /// Current phase.
    phase: SessionPhase,
    /// Numbered clues.
    clues: Vec<String>,
    /// Answer progress, one line per clue.
    answers: Vec<String>,
    /// Every slot with its visibility.
    slots: Vec<SlotView>,
    /// Text of the answer being built.
    current_answer: String,
}

impl PuzzleSession {
    /// Clues as numbered lines, e.g. `1. Ghosts in residence`.
    pub fn clues_view(&self) -> Vec<String> {
        self.level_data()
            .clues()
            .iter()
            .map(|clue| clue.to_string())
            .collect()
    }

    /// One line per solution: the word once solved, `N letters` before.
    pub fn answers_progress_view(&self) -> Vec<String> {
        self.level_data()
            .solutions()
            .iter()
            .enumerate()
            .map(|(position, word)| {
                if self.is_solved(position) {
                    word.clone()
                } else {
                    letters_label(word.chars().count())
                }
            })
            .collect()
    }

    /// Clues joined into a single block of text.
    pub fn clues_text(&self) -> String {
        self.clues_view().join("\n").trim().to_string()
    }

    /// Answer progress joined into a single block of text.
    pub fn answers_text(&self) -> String {
        self.answers_progress_view().join("\n").trim().to_string()
    }

    /// Every slot with its text and visibility.
    pub fn slots(&self) -> Vec<SlotView> {
        self.level_data()
            .fragments()
            .iter()
            .zip(self.slot_states())
            .enumerate()
            .map(|(index, (fragment, state))| SlotView {
                id: SlotId::new(index),
                text: fragment.text().clone(),
                visible: state.is_visible(),
            })
            .collect()
    }

    /// Captures everything a front end renders.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.current_level(),
            score: self.current_score(),
            phase: self.phase(),
            clues: self.clues_view(),
            answers: self.answers_progress_view(),
            slots: self.slots(),
            current_answer: self.current_answer(),
        }
    }
}
