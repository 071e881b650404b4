//! Puzzle session: the mutable game state driven by the presentation layer.
//!
//! A session owns the active [`LevelData`] and tracks which slots are
//! tapped, which words are solved, the score, and the level number. Every
//! operation runs to completion and either commits fully or changes nothing.

use crate::error::{LevelError, TapError};
use crate::loader::load_level;
use crate::outcome::{SessionPhase, SubmitOutcome};
use crate::random::RandomSource;
use crate::source::LevelSource;
use crate::types::{LevelData, SlotId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// State of a single fragment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Visible and tappable.
    Available,
    /// Hidden; part of the answer being built. Returned by `clear`.
    Pending,
    /// Hidden; used in a solved word. Stays hidden until the next level.
    Spent,
}

impl SlotState {
    /// Returns true if the slot should be shown.
    pub fn is_visible(self) -> bool {
        self == SlotState::Available
    }
}

/// One active game, spanning any number of levels.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    level: u32,
    score: u32,
    level_start_score: u32,
    slot_count: usize,
    level_data: LevelData,
    slots: Vec<SlotState>,
    active_answer: Vec<SlotId>,
    solved: Vec<bool>,
}

impl PuzzleSession {
    /// Creates a session on `level` from already loaded level data.
    ///
    /// The slot count for later levels is taken from this level's fragment pool.
    #[instrument(skip(level_data), fields(solutions = level_data.solution_count()))]
    pub fn new(level: u32, level_data: LevelData) -> Self {
        let slot_count = level_data.fragments().len();
        info!(level, slot_count, "Starting puzzle session");
        Self {
            level,
            score: 0,
            level_start_score: 0,
            slot_count,
            slots: vec![SlotState::Available; slot_count],
            solved: vec![false; level_data.solution_count()],
            active_answer: Vec::new(),
            level_data,
        }
    }

    /// Loads `level` from `source` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Any [`LevelError`] from fetching or parsing the level.
    #[instrument(skip(source, rng))]
    pub fn start(
        source: &impl LevelSource,
        level: u32,
        slot_count: usize,
        rng: &mut impl RandomSource,
    ) -> Result<Self, LevelError> {
        let text = source.level_text(level)?;
        let level_data = load_level(&text, slot_count, rng)?;
        Ok(Self::new(level, level_data))
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Appends the fragment in `slot` to the current answer and hides the slot.
    ///
    /// # Errors
    ///
    /// [`TapError::UnknownSlot`] if the slot is out of range,
    /// [`TapError::SlotConsumed`] if it is pending or spent.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn tap_fragment(&mut self, slot: SlotId) -> Result<(), TapError> {
        let state = self.slots.get_mut(slot.index()).ok_or_else(|| {
            warn!(%slot, "Tap on unknown slot");
            TapError::UnknownSlot(slot)
        })?;

        if *state != SlotState::Available {
            warn!(%slot, %state, "Tap on consumed slot");
            return Err(TapError::SlotConsumed(slot));
        }

        *state = SlotState::Pending;
        self.active_answer.push(slot);
        debug!(%slot, answer = %self.current_answer(), "Fragment tapped");
        Ok(())
    }

    /// Checks the current answer against the unsolved solutions.
    ///
    /// On a match the word is marked solved, the score goes up by one, and
    /// the tapped slots become spent. Otherwise nothing changes; the answer
    /// stays in place for the player to clear.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn submit(&mut self) -> SubmitOutcome {
        let candidate = self.current_answer();
        if candidate.is_empty() {
            debug!("Empty answer submitted");
            return SubmitOutcome::Incorrect;
        }

        let position = self
            .level_data
            .solutions()
            .iter()
            .zip(&self.solved)
            .position(|(solution, solved)| !solved && *solution == candidate);

        let Some(position) = position else {
            info!(%candidate, "Incorrect answer");
            return SubmitOutcome::Incorrect;
        };

        self.solved[position] = true;
        for slot in self.active_answer.drain(..) {
            self.slots[slot.index()] = SlotState::Spent;
        }
        self.score += 1;

        let level_complete = self.is_level_complete();
        if level_complete {
            debug_assert_eq!(
                (self.score - self.level_start_score) as usize,
                self.level_data.solution_count()
            );
            info!(score = self.score, "Level complete");
        } else {
            info!(%candidate, position, score = self.score, "Correct answer");
        }

        SubmitOutcome::Correct {
            position,
            level_complete,
        }
    }

    /// Returns every pending slot to the board and empties the answer.
    ///
    /// Returns the slots that became visible again, in tap order.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn clear(&mut self) -> Vec<SlotId> {
        let restored: Vec<SlotId> = self.active_answer.drain(..).collect();
        for slot in &restored {
            self.slots[slot.index()] = SlotState::Available;
        }
        debug!(restored = restored.len(), "Answer cleared");
        restored
    }

    /// Moves to the next level, keeping the score.
    ///
    /// Every slot becomes visible again. May be called before the current
    /// level is complete.
    ///
    /// # Errors
    ///
    /// [`LevelError::NotFound`] when `source` has no next level, or any
    /// load error for its text. The session is unchanged on error.
    #[instrument(skip(self, source, rng), fields(level = self.level))]
    pub fn advance_level(
        &mut self,
        source: &impl LevelSource,
        rng: &mut impl RandomSource,
    ) -> Result<&LevelData, LevelError> {
        let next = self.level + 1;
        let text = source.level_text(next).inspect_err(|e| {
            warn!(next, error = %e, "Cannot advance level");
        })?;
        let level_data = load_level(&text, self.slot_count, rng)?;
        self.install(next, level_data);
        info!(level = next, score = self.score, "Advanced to next level");
        Ok(&self.level_data)
    }

    /// Replaces the current level with freshly parsed text, keeping the score.
    ///
    /// # Errors
    ///
    /// Any load error; the session is unchanged on error.
    #[instrument(skip(self, raw_text, rng))]
    pub fn replace_level(
        &mut self,
        level: u32,
        raw_text: &str,
        rng: &mut impl RandomSource,
    ) -> Result<&LevelData, LevelError> {
        let level_data = load_level(raw_text, self.slot_count, rng)?;
        self.install(level, level_data);
        Ok(&self.level_data)
    }

    /// Commits a new level and resets all per-level state.
    fn install(&mut self, level: u32, level_data: LevelData) {
        self.level = level;
        self.level_start_score = self.score;
        self.slots = vec![SlotState::Available; level_data.fragments().len()];
        self.solved = vec![false; level_data.solution_count()];
        self.active_answer.clear();
        self.level_data = level_data;
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Current level number, starting at 1.
    pub fn current_level(&self) -> u32 {
        self.level
    }

    /// Total correct answers this session.
    pub fn current_score(&self) -> u32 {
        self.score
    }

    /// Number of fragment slots each level must fill.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The active level.
    pub fn level_data(&self) -> &LevelData {
        &self.level_data
    }

    /// Slots in the current answer, in tap order.
    pub fn active_answer(&self) -> &[SlotId] {
        &self.active_answer
    }

    /// Text of the current answer.
    pub fn current_answer(&self) -> String {
        self.active_answer
            .iter()
            .filter_map(|slot| self.level_data.fragment(*slot))
            .map(|f| f.text().as_str())
            .collect()
    }

    /// State of one slot, or `None` if it does not exist.
    pub fn slot_state(&self, slot: SlotId) -> Option<SlotState> {
        self.slots.get(slot.index()).copied()
    }

    /// Per-slot states in slot order.
    pub fn slot_states(&self) -> &[SlotState] {
        &self.slots
    }

    /// Returns true if the solution at `position` has been found.
    pub fn is_solved(&self, position: usize) -> bool {
        self.solved.get(position).copied().unwrap_or(false)
    }

    /// Number of solutions found on this level.
    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    /// Returns true once every solution of the level is found.
    pub fn is_level_complete(&self) -> bool {
        self.solved.iter().all(|s| *s)
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        if self.is_level_complete() {
            SessionPhase::LevelComplete
        } else if self.active_answer.is_empty() {
            SessionPhase::AwaitingInput
        } else {
            SessionPhase::AnswerPending
        }
    }
}
