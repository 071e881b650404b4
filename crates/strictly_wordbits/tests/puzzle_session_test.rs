//! Tests for loading levels and playing them through a session.

use strictly_wordbits::{
    InMemoryLevels, LevelError, PuzzleSession, RandomSource, SeededRandom, SessionPhase, SlotId,
    SubmitOutcome, load_level,
};

const HAUNTED: &str = "HA|UNT|ED: Ghosts in residence\nCA|T: Feline pet";

const SEVEN_WORDS: &str = "\
CLA|SS|IC: Longstanding
CHAL|LE|NGE: Dare
PR|OB|LEM: Puzzle
SU|PP|ORT: Prop up
TERM|IN|AL: Station
MO|NK|EY: Primate
TR|ICK: Sleight of hand
";

const NEXT_LEVEL: &str = "\
FO|RE|ST: Many trees
RI|VE|R: Flowing water
MOUN|TAIN: Peak
GA|RD|EN: Flower bed
IS|LA|ND: Surrounded by sea
VA|LL|EY: Between hills
DE|SE|RT: Dry land
";

/// Swaps the first two elements of every sequence it shuffles.
struct SwapFirstTwo;

impl RandomSource for SwapFirstTwo {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() > 1 {
            items.swap(0, 1);
        }
    }
}

fn spell(session: &mut PuzzleSession, position: usize) -> SubmitOutcome {
    for slot in session.level_data().slots_for_solution(position) {
        session.tap_fragment(slot).expect("Slot is available");
    }
    session.submit()
}

#[test]
fn test_example_level() {
    let level = load_level(HAUNTED, 5, &mut SeededRandom::from_seed(3)).expect("Valid level");

    let mut solutions = level.solutions().clone();
    solutions.sort();
    assert_eq!(solutions, ["CAT", "HAUNTED"]);

    let mut fragments = level.fragment_texts();
    fragments.sort_unstable();
    assert_eq!(fragments, ["CA", "ED", "HA", "T", "UNT"]);

    let first = level.clues()[0].to_string();
    assert!(first == "1. Ghosts in residence" || first == "1. Feline pet");

    let haunted = level
        .solutions()
        .iter()
        .position(|s| s == "HAUNTED")
        .expect("HAUNTED is a solution");
    let mut session = PuzzleSession::new(1, level);
    assert_eq!(
        spell(&mut session, haunted),
        SubmitOutcome::Correct {
            position: haunted,
            level_complete: false
        }
    );
}

#[test]
fn test_fragments_reassemble_for_any_seed() {
    for seed in 0..50 {
        let level = load_level(SEVEN_WORDS, 20, &mut SeededRandom::from_seed(seed))
            .expect("Valid level");
        assert_eq!(level.solution_count(), 7);
        for (position, solution) in level.solutions().iter().enumerate() {
            let spelled: String = level
                .slots_for_solution(position)
                .into_iter()
                .filter_map(|slot| level.fragment(slot))
                .map(|f| f.text().as_str())
                .collect();
            assert_eq!(&spelled, solution, "seed {seed}");
        }
    }
}

#[test]
fn test_shuffle_preserves_clues_and_fragments() {
    let expected_clues = {
        let mut clues: Vec<String> = SEVEN_WORDS
            .lines()
            .filter_map(|line| line.split(": ").nth(1))
            .map(str::to_string)
            .collect();
        clues.sort();
        clues
    };
    let expected_fragments = {
        let mut fragments: Vec<&str> = SEVEN_WORDS
            .lines()
            .filter_map(|line| line.split(": ").next())
            .flat_map(|answer| answer.split('|'))
            .collect();
        fragments.sort_unstable();
        fragments
    };

    for seed in [1, 17, 256] {
        let level = load_level(SEVEN_WORDS, 20, &mut SeededRandom::from_seed(seed))
            .expect("Valid level");

        let numbers: Vec<usize> = level.clues().iter().map(|c| *c.number()).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());

        let mut clues: Vec<String> = level.clues().iter().map(|c| c.text().clone()).collect();
        clues.sort();
        assert_eq!(clues, expected_clues);

        let mut fragments = level.fragment_texts();
        fragments.sort_unstable();
        assert_eq!(fragments, expected_fragments);
    }
}

#[test]
fn test_injected_permutation_is_used() {
    let level = load_level(HAUNTED, 5, &mut SwapFirstTwo).expect("Valid level");
    assert_eq!(level.solutions(), &["CAT", "HAUNTED"]);
    // Pool before shuffle: CA T HA UNT ED.
    assert_eq!(level.fragment_texts(), ["T", "CA", "HA", "UNT", "ED"]);
}

#[test]
fn test_same_answer_twice_is_incorrect() {
    let level = load_level("CA|T: Feline pet\nCA|T|S: Felines", 5, &mut SwapFirstTwo)
        .expect("Valid level");
    let mut session = PuzzleSession::new(1, level);
    let cat = session
        .level_data()
        .solutions()
        .iter()
        .position(|s| s == "CAT")
        .expect("CAT is a solution");

    assert!(spell(&mut session, cat).is_correct());

    // The CATS fragments can spell CAT a second time.
    let cats = 1 - cat;
    let slots = session.level_data().slots_for_solution(cats);
    for slot in &slots[..2] {
        session.tap_fragment(*slot).expect("Slot is available");
    }
    assert_eq!(session.current_answer(), "CAT");
    assert_eq!(session.submit(), SubmitOutcome::Incorrect);
    assert_eq!(session.current_score(), 1);
    assert_eq!(session.current_answer(), "CAT");
}

#[test]
fn test_duplicate_words_solve_separately() {
    let levels = InMemoryLevels::new().with_level(1, "CA|T: Feline pet\nCA|T: Tabby\nDO|G: Canine");
    let mut session =
        PuzzleSession::start(&levels, 1, 6, &mut SwapFirstTwo).expect("Valid level");

    let cat = session
        .level_data()
        .solutions()
        .iter()
        .position(|s| s == "CAT")
        .expect("CAT is a solution");
    assert_eq!(spell(&mut session, cat).position(), Some(cat));

    // The second CAT record is a different position.
    let second = session
        .level_data()
        .solutions()
        .iter()
        .enumerate()
        .position(|(i, s)| s == "CAT" && i != cat)
        .expect("Second CAT");
    assert_eq!(spell(&mut session, second).position(), Some(second));
    assert_eq!(session.solved_count(), 2);
}

#[test]
fn test_score_counts_each_correct_answer_once() {
    let levels = InMemoryLevels::new().with_level(1, SEVEN_WORDS);
    let mut rng = SeededRandom::from_seed(5);
    let mut session = PuzzleSession::start(&levels, 1, 20, &mut rng).expect("Valid level");

    for position in 0..7 {
        let outcome = spell(&mut session, position);
        assert!(outcome.is_correct());
        assert_eq!(session.current_score(), position as u32 + 1);
        assert_eq!(outcome.completes_level(), position == 6);
    }
    assert_eq!(session.phase(), SessionPhase::LevelComplete);
    assert_eq!(session.submit(), SubmitOutcome::Incorrect);
}

#[test]
fn test_completion_tracks_solution_count() {
    // Three solutions, so completion comes on the third answer rather than any fixed number.
    let levels = InMemoryLevels::new().with_level(1, "A|B: one\nC|D: two\nE|F: three");
    let mut rng = SeededRandom::from_seed(9);
    let mut session = PuzzleSession::start(&levels, 1, 6, &mut rng).expect("Valid level");

    assert!(!spell(&mut session, 0).completes_level());
    assert!(!spell(&mut session, 1).completes_level());
    assert!(spell(&mut session, 2).completes_level());
}

#[test]
fn test_clear_then_retap() {
    let levels = InMemoryLevels::new().with_level(1, HAUNTED);
    let mut rng = SeededRandom::from_seed(11);
    let mut session = PuzzleSession::start(&levels, 1, 5, &mut rng).expect("Valid level");

    let slots: Vec<SlotId> = (0..3).map(SlotId::new).collect();
    for slot in &slots {
        session.tap_fragment(*slot).expect("Available");
    }
    assert_eq!(session.clear(), slots);
    assert!(session.active_answer().is_empty());
    for slot in &slots {
        session.tap_fragment(*slot).expect("Restored slot");
    }
}

#[test]
fn test_advance_after_full_level_preserves_score() {
    let levels = InMemoryLevels::new()
        .with_level(1, SEVEN_WORDS)
        .with_level(2, NEXT_LEVEL);
    let mut rng = SeededRandom::from_seed(21);
    let mut session = PuzzleSession::start(&levels, 1, 20, &mut rng).expect("Valid level");

    for position in 0..7 {
        spell(&mut session, position);
    }
    assert_eq!(session.current_score(), 7);

    session.advance_level(&levels, &mut rng).expect("Level 2 exists");
    assert_eq!(session.current_level(), 2);
    assert_eq!(session.current_score(), 7);
    assert_eq!(session.solved_count(), 0);
    assert!(session.answers_progress_view().iter().all(|a| a.ends_with("letters")));
    assert!(session.slots().iter().all(|s| *s.visible()));

    // Second level completes on its own seventh answer.
    for position in 0..7 {
        let outcome = spell(&mut session, position);
        assert_eq!(outcome.completes_level(), position == 6);
    }
    assert_eq!(session.current_score(), 14);

    let err = session.advance_level(&levels, &mut rng).unwrap_err();
    assert_eq!(err, LevelError::NotFound { level: 3 });
    assert_eq!(session.current_level(), 2);
}
