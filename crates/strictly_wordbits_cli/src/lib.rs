//! Strictly Wordbits terminal front end
//!
//! Wires the [`strictly_wordbits`] engine to stdin/stdout: level files are
//! read from a directory, commands come in one per line, and the board is
//! redrawn after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod levels;
mod play;
mod render;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Level files
pub use levels::{DirectoryLevels, LevelCheck, check_levels};

// Crate-level exports - Game loop
pub use play::{CommandError, Game, HELP, PlayerCommand, TurnReport};
pub use render::{OutputFormat, render, render_text};
