//! End-to-end submit and results flows through `Session`.

use scorecard_core::{Error, ResultsPolicy, Scorecard, SessionState};

use crate::common::{SIX_ROUNDS, session_with};

#[test]
fn test_one_shot_results_page() {
    let mut session = session_with(ResultsPolicy::Once, &SIX_ROUNDS);

    let report = session.show_results().expect("results should be available");
    let top: Vec<&str> = report.top.iter().map(Scorecard::course_name).collect();
    assert_eq!(top, vec!["D", "C", "A", "B", "E"]);

    let listing: Vec<&str> = report.by_name.iter().map(Scorecard::course_name).collect();
    assert_eq!(listing, vec!["A", "B", "C", "D", "E", "F"]);

    let text = report.to_string();
    assert!(text.contains("Low Score: 65\n"));
    assert!(text.contains("High Score: 81\n"));
    assert!(text.contains("Average Score: 73\n"));

    assert_eq!(session.state(), SessionState::Closed);
    assert!(matches!(
        session.show_results(),
        Err(Error::ResultsAlreadyShown)
    ));
}

#[test]
fn test_listing_keeps_submission_order_in_session() {
    let rounds = [("Zebra", "70", "72"), ("Alpha", "70", "71")];
    let mut session = session_with(ResultsPolicy::Repeatable, &rounds);

    let report = session.show_results().unwrap();
    assert_eq!(report.by_name[0].course_name(), "Alpha");
    assert_eq!(session.scorecards()[0].course_name(), "Zebra");
}

#[test]
fn test_bad_input_between_good_rounds() {
    let mut session = session_with(ResultsPolicy::Repeatable, &SIX_ROUNDS[..2]);

    let err = session.submit("C", "par", "68").unwrap_err();
    assert!(err.is_user_input());
    let err = session.submit("C", "72", "-68").unwrap_err();
    assert!(matches!(err, Error::NegativeValue { value: -68, .. }));

    let report = session.show_results().unwrap();
    assert_eq!(report.by_name.len(), 2);
    assert_eq!(report.summary.average, Some(72));
}

#[test]
fn test_results_unavailable_before_first_round() {
    let mut session = session_with(ResultsPolicy::Once, &[]);
    assert!(!session.can_show_results());
    let err = session.show_results().unwrap_err();
    assert_eq!(err.to_string(), "No scorecards have been recorded yet");
}
