//! Where level text comes from.

use crate::error::LevelError;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Resource name for a level, e.g. `level3`.
pub fn resource_name(level: u32) -> String {
    format!("level{}", level)
}

/// Supplies raw level text by level number.
///
/// Implementations return [`LevelError::NotFound`] once the levels run out;
/// callers treat that as the end of the game.
pub trait LevelSource {
    /// Returns the raw text of `level`.
    fn level_text(&self, level: u32) -> Result<String, LevelError>;
}

/// Level texts held in memory, keyed by level number.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLevels {
    levels: BTreeMap<u32, String>,
}

impl InMemoryLevels {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the text of one level.
    #[instrument(skip(self, text))]
    pub fn insert(&mut self, level: u32, text: impl Into<String>) {
        self.levels.insert(level, text.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_level(mut self, level: u32, text: impl Into<String>) -> Self {
        self.insert(level, text);
        self
    }
}

impl LevelSource for InMemoryLevels {
    #[instrument(skip(self))]
    fn level_text(&self, level: u32) -> Result<String, LevelError> {
        let text = self
            .levels
            .get(&level)
            .cloned()
            .ok_or(LevelError::NotFound { level })?;
        debug!(resource = %resource_name(level), "Found level text");
        Ok(text)
    }
}

impl<S: LevelSource + ?Sized> LevelSource for &S {
    fn level_text(&self, level: u32) -> Result<String, LevelError> {
        (**self).level_text(level)
    }
}
