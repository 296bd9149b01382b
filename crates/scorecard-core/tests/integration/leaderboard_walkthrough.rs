//! The six-round walkthrough against the public leaderboard API.

use scorecard_core::{Leaderboard, OfferOutcome, Scorecard};

use crate::common::SIX_ROUNDS;

#[test]
fn test_sixth_round_rejected_when_worse_than_worst() {
    let mut board = Leaderboard::default();
    let mut outcomes = Vec::new();
    for (name, par, score) in SIX_ROUNDS {
        outcomes.push(board.offer(Scorecard::parse(name, par, score).unwrap()));
    }

    assert!(outcomes[..5].iter().all(|o| *o == OfferOutcome::Admitted));
    assert_eq!(outcomes[5], OfferOutcome::Rejected);

    let held: Vec<i64> = board.iter().map(Scorecard::relative_score).collect();
    assert_eq!(held, vec![-7, -4, -2, 3, 7]);
}

#[test]
fn test_late_strong_round_displaces_worst() {
    let mut board = Leaderboard::default();
    for (name, par, score) in &SIX_ROUNDS[..5] {
        board.offer(Scorecard::parse(name, par, score).unwrap());
    }

    let outcome = board.offer(Scorecard::new("G", 72, 66).unwrap());
    let OfferOutcome::Replaced { evicted } = outcome else {
        unreachable!("expected the worst round to be replaced");
    };
    assert_eq!(evicted.course_name(), "E");

    let top = board.drain_sorted(5);
    let names: Vec<&str> = top.iter().map(Scorecard::course_name).collect();
    assert_eq!(names, vec!["D", "G", "C", "A", "B"]);
    assert!(board.is_empty());
}
