//! Common fixtures for scorecard integration tests.

use scorecard_core::{ResultsPolicy, Session};

/// The six rounds from the leaderboard walkthrough, all on a par-72 course.
///
/// Relative scores in order: -2, +3, -4, -7, +7, +9.
pub const SIX_ROUNDS: [(&str, &str, &str); 6] = [
    ("A", "72", "70"),
    ("B", "72", "75"),
    ("C", "72", "68"),
    ("D", "72", "65"),
    ("E", "72", "79"),
    ("F", "72", "81"),
];

/// Creates a session and submits every round, panicking on invalid input.
pub fn session_with(policy: ResultsPolicy, rounds: &[(&str, &str, &str)]) -> Session {
    let mut session = Session::new(Session::DEFAULT_CAPACITY, policy).unwrap();
    for (name, par, score) in rounds {
        session
            .submit(name, par, score)
            .expect("fixture rounds should be valid");
    }
    session
}
