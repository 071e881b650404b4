//! Level loader: parses level text into shuffled clues and fragments.
//!
//! Level text holds one record per line:
//!
//! ```text
//! HA|UNT|ED: Ghosts in residence
//! CA|T: Feline pet
//! ```
//!
//! The answer before `": "` is split on `|` into fragments. Records are
//! shuffled (which renumbers the clues), then the whole fragment pool is
//! shuffled again independently.

use crate::error::{FormatIssue, LevelError};
use crate::random::RandomSource;
use crate::types::{Clue, Fragment, LevelData};
use tracing::{debug, info, instrument, warn};

/// Separator between the answer and the clue in a record.
pub const CLUE_SEPARATOR: &str = ": ";

/// Separator between fragments in an answer.
pub const FRAGMENT_SEPARATOR: char = '|';

/// A single parsed line, before shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record<'a> {
    fragments: Vec<&'a str>,
    clue: &'a str,
}

/// Parses one record, reporting problems against its 1-based line number.
#[instrument]
fn parse_record(line_number: usize, line: &str) -> Result<Record<'_>, LevelError> {
    let format_error = |issue| LevelError::Format {
        line: line_number,
        issue,
    };

    let mut parts = line.split(CLUE_SEPARATOR);
    let answer = parts.next().unwrap_or_default();
    let clue = parts
        .next()
        .ok_or_else(|| format_error(FormatIssue::MissingSeparator))?;
    if parts.next().is_some() {
        return Err(format_error(FormatIssue::ExtraSeparator));
    }

    if answer.is_empty() {
        return Err(format_error(FormatIssue::NoFragments));
    }

    let fragments: Vec<&str> = answer.split(FRAGMENT_SEPARATOR).collect();
    if fragments.iter().any(|f| f.is_empty()) {
        return Err(format_error(FormatIssue::EmptyFragment));
    }

    Ok(Record { fragments, clue })
}

/// Loads a level from raw text.
///
/// `slot_count` is the number of fragment slots the caller can display; the
/// level must produce exactly that many fragments.
///
/// # Errors
///
/// - [`LevelError::Format`] if any line is malformed or there are no records.
/// - [`LevelError::SlotCountMismatch`] if the fragment pool does not fit the slots.
///
/// Nothing is returned on error, so callers never see a partial level.
#[instrument(skip(raw_text, rng), fields(bytes = raw_text.len()))]
pub fn load_level(
    raw_text: &str,
    slot_count: usize,
    rng: &mut impl RandomSource,
) -> Result<LevelData, LevelError> {
    let mut lines: Vec<&str> = raw_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return Err(LevelError::Format {
            line: 1,
            issue: FormatIssue::NoRecords,
        });
    }

    let mut records = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_record(i + 1, line))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "Parsed level records");

    rng.shuffle(&mut records);

    let mut clues = Vec::with_capacity(records.len());
    let mut solutions = Vec::with_capacity(records.len());
    let mut pool = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        clues.push(Clue::new(index + 1, record.clue.to_string()));
        solutions.push(record.fragments.concat());
        pool.extend(
            record
                .fragments
                .iter()
                .enumerate()
                .map(|(part, text)| Fragment::new((*text).to_string(), index, part)),
        );
    }

    rng.shuffle(&mut pool);

    if pool.len() != slot_count {
        warn!(
            expected = slot_count,
            found = pool.len(),
            "Fragment count does not match slot count"
        );
        return Err(LevelError::SlotCountMismatch {
            expected: slot_count,
            found: pool.len(),
        });
    }

    info!(
        solutions = solutions.len(),
        fragments = pool.len(),
        "Level loaded"
    );
    Ok(LevelData::new(clues, solutions, pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Leaves every sequence in its original order.
    struct InOrder;

    impl RandomSource for InOrder {
        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }

    /// Reverses every sequence.
    struct Reversed;

    impl RandomSource for Reversed {
        fn shuffle<T>(&mut self, items: &mut [T]) {
            items.reverse();
        }
    }

    const LEVEL: &str = "HA|UNT|ED: Ghosts in residence\nCA|T: Feline pet\n";

    #[test]
    fn test_load_in_order() {
        let level = load_level(LEVEL, 5, &mut InOrder).expect("Valid level");
        assert_eq!(level.solutions(), &["HAUNTED", "CAT"]);
        assert_eq!(level.fragment_texts(), ["HA", "UNT", "ED", "CA", "T"]);
        assert_eq!(level.clues()[0].to_string(), "1. Ghosts in residence");
        assert_eq!(level.clues()[1].to_string(), "2. Feline pet");
        assert_eq!(level.solution_lengths(), [7, 3]);
    }

    #[test]
    fn test_shuffle_renumbers_clues() {
        let level = load_level(LEVEL, 5, &mut Reversed).expect("Valid level");
        assert_eq!(level.solutions(), &["CAT", "HAUNTED"]);
        assert_eq!(level.clues()[0].to_string(), "1. Feline pet");
        assert_eq!(level.clues()[1].to_string(), "2. Ghosts in residence");
        // Records reversed, then pool reversed.
        assert_eq!(level.fragment_texts(), ["ED", "UNT", "HA", "T", "CA"]);
    }

    #[test]
    fn test_fragments_regroup_into_solutions() {
        let level = load_level(LEVEL, 5, &mut Reversed).expect("Valid level");
        for (index, solution) in level.solutions().iter().enumerate() {
            let spelled: String = level
                .slots_for_solution(index)
                .into_iter()
                .filter_map(|slot| level.fragment(slot))
                .map(|f| f.text().as_str())
                .collect();
            assert_eq!(&spelled, solution);
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let level = load_level("A|B: first\r\nC|D: second\r\n", 4, &mut InOrder).expect("Valid level");
        assert_eq!(level.clues()[1].text(), "second");
    }

    #[test]
    fn test_missing_separator() {
        let err = load_level("HA|UNT|ED Ghosts\nCA|T: Feline pet", 5, &mut InOrder).unwrap_err();
        assert_eq!(
            err,
            LevelError::Format {
                line: 1,
                issue: FormatIssue::MissingSeparator
            }
        );
    }

    #[test]
    fn test_extra_separator() {
        let err = load_level("CA|T: Feline: pet", 2, &mut InOrder).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Format {
                issue: FormatIssue::ExtraSeparator,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_fragment() {
        let err = load_level("CA|T: Feline pet\nHA||ED: Ghosts", 4, &mut InOrder).unwrap_err();
        assert_eq!(
            err,
            LevelError::Format {
                line: 2,
                issue: FormatIssue::EmptyFragment
            }
        );
    }

    #[test]
    fn test_empty_answer() {
        let err = load_level(": no answer", 0, &mut InOrder).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Format {
                issue: FormatIssue::NoFragments,
                ..
            }
        ));
    }

    #[test]
    fn test_interior_blank_line_is_malformed() {
        let err = load_level("CA|T: Feline pet\n\nDO|G: Canine pet", 4, &mut InOrder).unwrap_err();
        assert!(matches!(err, LevelError::Format { line: 2, .. }));
    }

    #[test]
    fn test_no_records() {
        let err = load_level("\n\n", 0, &mut InOrder).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Format {
                issue: FormatIssue::NoRecords,
                ..
            }
        ));
    }

    #[test]
    fn test_slot_count_mismatch() {
        let err = load_level(LEVEL, 20, &mut InOrder).unwrap_err();
        assert_eq!(
            err,
            LevelError::SlotCountMismatch {
                expected: 20,
                found: 5
            }
        );
    }
}
