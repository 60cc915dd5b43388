use rand::rngs::StdRng;
use rand::SeedableRng;
use sheetcards_core::{pick_next, CoreError, Difficulty, FlashcardRecord, SessionState};
use std::collections::HashSet;

fn deck(difficulties: &[Option<Difficulty>]) -> Vec<FlashcardRecord> {
    difficulties
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut r = FlashcardRecord::new(i, format!("q{i}"), format!("a{i}"));
            r.difficulty = *d;
            r
        })
        .collect()
}

#[test]
fn empty_collection_fails() {
    let mut session = SessionState::new();
    let mut rng = StdRng::seed_from_u64(1);
    let err = pick_next(&[], &mut session, &mut rng).unwrap_err();
    assert!(matches!(err, CoreError::EmptyCollection));
    assert_eq!(session.current, None);
}

#[test]
fn every_card_once_before_repeats() {
    let records = deck(&[
        Some(Difficulty::Hard),
        Some(Difficulty::Hard),
        Some(Difficulty::Medium),
        Some(Difficulty::Easy),
        None,
    ]);
    let mut session = SessionState::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _cycle in 0..3 {
        let mut seen = HashSet::new();
        for _ in 0..records.len() {
            let id = pick_next(&records, &mut session, &mut rng).unwrap();
            assert!(seen.insert(id), "card {id} repeated within a cycle");
            session.shown.insert(id);
        }
        assert_eq!(seen.len(), records.len());
    }
}

#[test]
fn reshuffles_when_everything_was_shown() {
    let records = deck(&[Some(Difficulty::Easy), Some(Difficulty::Hard)]);
    let mut session = SessionState::new();
    session.shown.extend([0, 1]);
    let mut rng = StdRng::seed_from_u64(3);

    let id = pick_next(&records, &mut session, &mut rng).unwrap();
    assert!(session.shown.is_empty());
    assert_eq!(session.current, Some(id));
}

#[test]
fn picking_hides_the_answer() {
    let records = deck(&[Some(Difficulty::Medium)]);
    let mut session = SessionState::new();
    session.reveal();
    let mut rng = StdRng::seed_from_u64(9);

    let id = pick_next(&records, &mut session, &mut rng).unwrap();
    assert_eq!(id, 0);
    assert!(!session.answer_revealed);
    assert_eq!(session.current_record(&records).map(|r| r.question.as_str()), Some("q0"));
}

#[test]
fn only_unseen_cards_are_drawn() {
    let records = deck(&[Some(Difficulty::Hard), Some(Difficulty::Easy), Some(Difficulty::Hard)]);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut session = SessionState::new();
        session.shown.extend([0, 2]);
        assert_eq!(pick_next(&records, &mut session, &mut rng).unwrap(), 1);
    }
}

#[test]
fn harder_cards_come_up_more_often() {
    let records = deck(&[Some(Difficulty::Easy), Some(Difficulty::Medium), Some(Difficulty::Hard)]);
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 60_000;
    let mut counts = [0usize; 3];
    for _ in 0..trials {
        let mut session = SessionState::new();
        counts[pick_next(&records, &mut session, &mut rng).unwrap()] += 1;
    }

    let freq = |i: usize| counts[i] as f64 / trials as f64;
    assert!((freq(0) - 1.0 / 6.0).abs() < 0.02, "easy {}", freq(0));
    assert!((freq(1) - 2.0 / 6.0).abs() < 0.02, "medium {}", freq(1));
    assert!((freq(2) - 3.0 / 6.0).abs() < 0.02, "hard {}", freq(2));
}

#[test]
fn unrated_weighs_like_easy() {
    let records = deck(&[None, Some(Difficulty::Easy)]);
    let mut rng = StdRng::seed_from_u64(5);
    let trials = 20_000;
    let mut unrated = 0usize;
    for _ in 0..trials {
        let mut session = SessionState::new();
        if pick_next(&records, &mut session, &mut rng).unwrap() == 0 {
            unrated += 1;
        }
    }
    let freq = unrated as f64 / trials as f64;
    assert!((freq - 0.5).abs() < 0.03, "unrated {freq}");
}
