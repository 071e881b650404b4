//! Wordbits - terminal word-fragment puzzle.

use anyhow::{Result, bail};
use clap::Parser;
use strictly_wordbits::SeededRandom;
use strictly_wordbits_cli::{
    Cli, Command, DirectoryLevels, Game, GameConfig, HELP, OutputFormat, check_levels,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            level,
            seed,
            format,
        } => {
            let config = config.with_overrides(cli.levels_dir, cli.slot_count, level, seed);
            run_play(config, format)
        }
        Command::Check { from } => {
            let config = config.with_overrides(cli.levels_dir, cli.slot_count, None, None);
            run_check(config, from)
        }
    }
}

/// Plays a game on stdin/stdout.
#[instrument(skip_all, fields(levels_dir = %config.levels_dir().display()))]
fn run_play(config: GameConfig, format: OutputFormat) -> Result<()> {
    config.validate()?;

    let rng = match config.seed() {
        Some(seed) => SeededRandom::from_seed(*seed),
        None => SeededRandom::from_entropy(),
    };
    let source = DirectoryLevels::new(config.levels_dir().clone());

    let mut game = Game::start(source, rng, *config.starting_level(), *config.slot_count())?;
    info!(level = *config.starting_level(), "Game started");

    if format == OutputFormat::Text {
        println!("{}", HELP);
    }

    let stdin = std::io::stdin();
    let score = game.run(stdin.lock(), std::io::stdout(), format)?;
    info!(score, "Game over");
    Ok(())
}

/// Loads every level file and reports problems.
#[instrument(skip_all, fields(levels_dir = %config.levels_dir().display()))]
fn run_check(config: GameConfig, from: u32) -> Result<()> {
    config.validate()?;

    let source = DirectoryLevels::new(config.levels_dir().clone());
    let checks = check_levels(&source, from, *config.slot_count());
    if checks.is_empty() {
        bail!(
            "No level files found starting at {}",
            source.path_for(from).display()
        );
    }

    let mut failures = 0;
    for check in &checks {
        match check.result() {
            Ok((solutions, fragments)) => println!(
                "level{}: ok ({} words, {} fragments)",
                check.level(),
                solutions,
                fragments
            ),
            Err(e) => {
                failures += 1;
                println!("level{}: {}", check.level(), e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} levels failed", failures, checks.len());
    }
    Ok(())
}
