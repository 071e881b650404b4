//! Session phases and submit results.

use serde::{Deserialize, Serialize};

/// Observable phase of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Fragments are available and no answer is being built.
    AwaitingInput,
    /// At least one fragment has been tapped into the current answer.
    AnswerPending,
    /// Every solution of the level has been found.
    LevelComplete,
}

/// Result of submitting the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The answer matched an unsolved solution.
    Correct {
        /// Index of the solution in clue order.
        position: usize,
        /// True if this answer solved the last remaining word.
        level_complete: bool,
    },
    /// No unsolved solution matched; the answer is left as it was.
    Incorrect,
}

impl SubmitOutcome {
    /// Returns true for [`SubmitOutcome::Correct`].
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Correct { .. })
    }

    /// Returns true if this submission completed the level.
    pub fn completes_level(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Correct {
                level_complete: true,
                ..
            }
        )
    }

    /// Returns the solved position, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            SubmitOutcome::Correct { position, .. } => Some(*position),
            SubmitOutcome::Incorrect => None,
        }
    }
}

impl std::fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitOutcome::Correct {
                position,
                level_complete: true,
            } => write!(f, "Correct (answer {}), level complete", position + 1),
            SubmitOutcome::Correct { position, .. } => write!(f, "Correct (answer {})", position + 1),
            SubmitOutcome::Incorrect => write!(f, "Incorrect"),
        }
    }
}
