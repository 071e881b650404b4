//! Strictly Wordbits - word-fragment puzzle logic
//!
//! Each level is a list of clues whose answers are split into letter
//! fragments. The fragments are shuffled onto slots; the player taps slots
//! to spell an answer, submits it, and moves on once every word is found.
//!
//! # Architecture
//!
//! - **Loader**: parses level text into [`LevelData`] ([`load_level`])
//! - **Session**: tap / submit / clear / advance state machine ([`PuzzleSession`])
//! - **Views**: pull-based queries for rendering ([`SessionSnapshot`])
//! - **Randomness**: injectable shuffling ([`RandomSource`])
//!
//! # Example
//!
//! ```
//! use strictly_wordbits::{InMemoryLevels, PuzzleSession, SeededRandom, SlotId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let levels = InMemoryLevels::new().with_level(1, "HA|UNT|ED: Ghosts in residence\nCA|T: Feline pet");
//! let mut rng = SeededRandom::from_seed(42);
//! let mut session = PuzzleSession::start(&levels, 1, 5, &mut rng)?;
//!
//! for slot in session.level_data().slots_for_solution(0) {
//!     session.tap_fragment(slot)?;
//! }
//! assert!(session.submit().is_correct());
//! assert_eq!(session.current_score(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod loader;
mod outcome;
mod random;
mod session;
mod source;
mod types;
mod views;

// Crate-level exports - Errors
pub use error::{FormatIssue, LevelError, TapError};

// Crate-level exports - Level loading
pub use loader::{CLUE_SEPARATOR, FRAGMENT_SEPARATOR, load_level};
pub use source::{InMemoryLevels, LevelSource, resource_name};
pub use types::{Clue, Fragment, LevelData, SlotId, letters_label};

// Crate-level exports - Session
pub use outcome::{SessionPhase, SubmitOutcome};
pub use session::{PuzzleSession, SlotState};
pub use views::{SessionSnapshot, SlotView};

// Crate-level exports - Randomness
pub use random::{RandomSource, SeededRandom};
