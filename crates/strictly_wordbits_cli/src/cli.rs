//! Command-line interface for wordbits.

use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wordbits - spell clue answers from shuffled letter fragments
#[derive(Parser, Debug)]
#[command(name = "wordbits")]
#[command(about = "Word-fragment puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing level<N>.txt files
    #[arg(long, global = true)]
    pub levels_dir: Option<PathBuf>,

    /// Number of fragment slots each level must fill
    #[arg(long, global = true)]
    pub slot_count: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle, reading commands from stdin
    Play {
        /// Level to start on
        #[arg(long)]
        level: Option<u32>,

        /// Shuffle seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,

        /// Board output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check every level file in the levels directory
    Check {
        /// First level to check
        #[arg(long, default_value = "1")]
        from: u32,
    },
}
