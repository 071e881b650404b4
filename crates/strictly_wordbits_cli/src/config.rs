//! Game configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a terminal game.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding `level<N>.txt` files.
    #[serde(default = "default_levels_dir")]
    levels_dir: PathBuf,

    /// Number of fragment slots on the board; every level must fill it exactly.
    #[serde(default = "default_slot_count")]
    slot_count: usize,

    /// Level to start on.
    #[serde(default = "default_starting_level")]
    starting_level: u32,

    /// Fixed shuffle seed. Unset means a new layout every game.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_levels_dir() -> PathBuf {
    PathBuf::from("levels")
}

fn default_slot_count() -> usize {
    20
}

fn default_starting_level() -> u32 {
    1
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels_dir: default_levels_dir(),
            slot_count: default_slot_count(),
            starting_level: default_starting_level(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(levels_dir = %config.levels_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces values that were given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        levels_dir: Option<PathBuf>,
        slot_count: Option<usize>,
        starting_level: Option<u32>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(levels_dir) = levels_dir {
            self.levels_dir = levels_dir;
        }
        if let Some(slot_count) = slot_count {
            self.slot_count = slot_count;
        }
        if let Some(starting_level) = starting_level {
            self.starting_level = starting_level;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that the values can start a game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 {
            return Err(ConfigError::Zero {
                field: "slot_count",
            });
        }
        if self.starting_level == 0 {
            return Err(ConfigError::Zero {
                field: "starting_level",
            });
        }
        Ok(())
    }
}

/// Why a game configuration could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// The config file could not be read.
    #[display("Failed to read config file {}: {}", path.display(), reason)]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        reason: String,
    },

    /// The config file is not valid TOML for [`GameConfig`].
    #[display("Failed to parse config {}: {}", path.display(), reason)]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A value is out of range.
    #[display("{} must be at least 1", field)]
    Zero {
        /// Name of the offending setting.
        field: &'static str,
    },
}

impl std::error::Error for ConfigError {}
