//! Line-driven game loop: parses player commands and drives a session.

use crate::render::{OutputFormat, render};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_wordbits::{
    LevelError, LevelSource, PuzzleSession, RandomSource, SlotId, SubmitOutcome, TapError,
};
use tracing::{debug, info, instrument, warn};

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  tap <n> [<n> ...]  add the fragments in slots n (numbered from 1)
  submit             check the current answer
  clear              put the current answer's fragments back
  next               skip to the next level
  show               redraw the board
  help               show this list
  quit               end the game";

/// A command typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Tap slots, 1-based, in order.
    Tap(Vec<usize>),
    /// Submit the current answer.
    Submit,
    /// Clear the current answer.
    Clear,
    /// Advance to the next level.
    Next,
    /// Redraw the board.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error parsing a player command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank input.
    #[display("Type a command (or \"help\")")]
    Empty,
    /// Not a known command word.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// `tap` with nothing after it.
    #[display("Expected slot numbers after \"tap\"")]
    MissingSlots,
    /// A slot number that is not a positive integer.
    #[display("Invalid slot number: {}", _0)]
    InvalidSlot(String),
}

impl std::error::Error for CommandError {}

impl FromStr for PlayerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };

        match word.to_ascii_lowercase().as_str() {
            "tap" | "t" => {
                let slots = words
                    .map(|w| match w.parse::<usize>() {
                        Ok(n) if n > 0 => Ok(n),
                        _ => Err(CommandError::InvalidSlot(w.to_string())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if slots.is_empty() {
                    return Err(CommandError::MissingSlots);
                }
                Ok(PlayerCommand::Tap(slots))
            }
            "submit" | "s" => Ok(PlayerCommand::Submit),
            "clear" | "c" => Ok(PlayerCommand::Clear),
            "next" | "n" => Ok(PlayerCommand::Next),
            "show" => Ok(PlayerCommand::Show),
            "help" | "?" => Ok(PlayerCommand::Help),
            "quit" | "q" | "exit" => Ok(PlayerCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What happened in response to one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Lines to show the player.
    pub messages: Vec<String>,
    /// True once the game has ended.
    pub game_over: bool,
}

impl TurnReport {
    fn say(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// A running game: a session plus where its levels and shuffles come from.
#[derive(Debug)]
pub struct Game<S, R> {
    session: PuzzleSession,
    source: S,
    rng: R,
}

impl<S: LevelSource, R: RandomSource> Game<S, R> {
    /// Loads `starting_level` and starts a game.
    ///
    /// # Errors
    ///
    /// Any [`LevelError`] from the first level.
    #[instrument(skip(source, rng))]
    pub fn start(
        source: S,
        mut rng: R,
        starting_level: u32,
        slot_count: usize,
    ) -> Result<Self, LevelError> {
        let session = PuzzleSession::start(&source, starting_level, slot_count, &mut rng)?;
        Ok(Self {
            session,
            source,
            rng,
        })
    }

    /// The underlying session.
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    /// Applies one command.
    ///
    /// Player mistakes come back as messages. Only a broken next level
    /// (unreadable, malformed, or the wrong fragment count) is an error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: PlayerCommand) -> Result<TurnReport, LevelError> {
        let mut report = TurnReport::default();

        match command {
            PlayerCommand::Tap(numbers) => {
                for number in numbers {
                    let Some(index) = number.checked_sub(1) else {
                        report.say(format!("There is no slot {}.", number));
                        break;
                    };
                    match self.session.tap_fragment(SlotId::new(index)) {
                        Ok(()) => {}
                        Err(TapError::UnknownSlot(_)) => {
                            report.say(format!("There is no slot {}.", number));
                            break;
                        }
                        Err(TapError::SlotConsumed(_)) => {
                            report.say(format!("Slot {} is already used.", number));
                            break;
                        }
                    }
                }
            }
            PlayerCommand::Submit => match self.session.submit() {
                SubmitOutcome::Correct {
                    level_complete: true,
                    ..
                } => {
                    report.say(format!(
                        "Correct! Level {} complete.",
                        self.session.current_level()
                    ));
                    self.advance(&mut report)?;
                }
                SubmitOutcome::Correct { position, .. } => {
                    report.say(format!("Correct! Answer {} solved.", position + 1));
                }
                SubmitOutcome::Incorrect => {
                    report.say("Incorrect. Keep going or clear to start over.");
                }
            },
            PlayerCommand::Clear => {
                self.session.clear();
            }
            PlayerCommand::Next => self.advance(&mut report)?,
            PlayerCommand::Show => {}
            PlayerCommand::Help => report.say(HELP),
            PlayerCommand::Quit => {
                report.say(format!("Final score: {}", self.session.current_score()));
                report.game_over = true;
            }
        }

        Ok(report)
    }

    fn advance(&mut self, report: &mut TurnReport) -> Result<(), LevelError> {
        match self
            .session
            .advance_level(&self.source, &mut self.rng)
            .map(|_| ())
        {
            Ok(()) => {
                report.say(format!("Level {}", self.session.current_level()));
                Ok(())
            }
            Err(LevelError::NotFound { .. }) => {
                info!(score = self.session.current_score(), "Out of levels");
                report.say(format!(
                    "No more levels. Final score: {}",
                    self.session.current_score()
                ));
                report.game_over = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Reads commands from `input` until the game ends or input runs out.
    ///
    /// Returns the final score.
    #[instrument(skip_all, fields(format = %format))]
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut output: impl Write,
        format: OutputFormat,
    ) -> anyhow::Result<u32> {
        writeln!(output, "{}", render(&self.session, format)?)?;

        for line in input.lines() {
            let line = line?;
            let command = match line.parse::<PlayerCommand>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(%line, error = %e, "Unparsed command");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            let report = self.apply(command).inspect_err(|e| {
                warn!(error = %e, "Next level cannot be loaded");
            })?;
            for message in &report.messages {
                writeln!(output, "{}", message)?;
            }
            if report.game_over {
                return Ok(self.session.current_score());
            }
            writeln!(output, "{}", render(&self.session, format)?)?;
        }

        Ok(self.session.current_score())
    }
}
