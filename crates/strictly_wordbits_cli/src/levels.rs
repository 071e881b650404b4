//! Level files on disk.

use derive_getters::Getters;
use derive_new::new;
use std::io::ErrorKind;
use std::path::PathBuf;
use strictly_wordbits::{LevelError, LevelSource, SeededRandom, load_level, resource_name};
use tracing::{debug, info, instrument, warn};

/// Reads `level<N>.txt` files from a directory.
#[derive(Debug, Clone, Getters, new)]
pub struct DirectoryLevels {
    dir: PathBuf,
}

impl DirectoryLevels {
    /// Path of the file holding `level`.
    pub fn path_for(&self, level: u32) -> PathBuf {
        self.dir.join(format!("{}.txt", resource_name(level)))
    }
}

impl LevelSource for DirectoryLevels {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn level_text(&self, level: u32) -> Result<String, LevelError> {
        let path = self.path_for(level);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "Read level file");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No level file");
                Err(LevelError::NotFound { level })
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read level file");
                Err(LevelError::Unreadable {
                    level,
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Result of checking one level file.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LevelCheck {
    /// Level number.
    level: u32,
    /// Solution and fragment counts, or why the level cannot be played.
    result: Result<(usize, usize), LevelError>,
}

/// Loads every level from `first` upward until one is missing.
///
/// Returns one entry per level file found. Shuffling does not affect
/// validity, so a fixed seed is used.
#[instrument(skip(source))]
pub fn check_levels(source: &impl LevelSource, first: u32, slot_count: usize) -> Vec<LevelCheck> {
    let mut rng = SeededRandom::from_seed(0);
    let mut checks = Vec::new();

    for level in first.. {
        let text = match source.level_text(level) {
            Ok(text) => text,
            Err(LevelError::NotFound { .. }) => break,
            Err(e) => {
                checks.push(LevelCheck {
                    level,
                    result: Err(e),
                });
                break;
            }
        };

        let result = load_level(&text, slot_count, &mut rng)
            .map(|data| (data.solution_count(), data.fragments().len()));
        checks.push(LevelCheck { level, result });
    }

    info!(levels = checks.len(), "Checked level files");
    checks
}
