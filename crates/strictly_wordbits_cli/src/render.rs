//! Board rendering for the terminal.

use strictly_wordbits::PuzzleSession;

/// Slots drawn per row.
const SLOTS_PER_ROW: usize = 5;

/// How the board is written after each command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable board.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Renders the session in the chosen format.
pub fn render(session: &PuzzleSession, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(session)),
        OutputFormat::Json => serde_json::to_string(&session.snapshot()),
    }
}

/// Renders the board as text: header, clues, answers, slots, current answer.
pub fn render_text(session: &PuzzleSession) -> String {
    let mut out = format!(
        "\nLevel {}    Score {}\n\nClues:\n{}\n\nAnswers:\n{}\n\n",
        session.current_level(),
        session.current_score(),
        session.clues_text(),
        session.answers_text(),
    );

    let slots = session.slots();
    let width = slots.iter().map(|s| s.text().chars().count()).max().unwrap_or(0);
    for row in slots.chunks(SLOTS_PER_ROW) {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| {
                let label = if *slot.visible() { slot.text().as_str() } else { "" };
                format!("[{:>2}] {:<width$}", slot.id().index() + 1, label, width = width)
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out.push_str(&format!("\nAnswer: {}", session.current_answer()));
    out
}
