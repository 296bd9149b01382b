//! Full form conversations against configured sessions.

use std::io::Cursor;

use scorecard_cli::cli::SessionArgs;
use scorecard_cli::config::ScorecardConfig;
use scorecard_cli::form::Form;
use scorecard_core::{Scorecard, Session, SessionState};

fn drive(input: &str, session: &mut Session) -> String {
    let mut form = Form::new(Cursor::new(input.to_string()), Vec::new());
    form.run(session).expect("form should not hit I/O errors");
    String::from_utf8(form.into_output()).unwrap()
}

#[test]
fn test_six_rounds_then_results() {
    let mut session = ScorecardConfig::default().new_session().unwrap();
    let mut input = String::new();
    for (name, score) in [
        ("A", 70),
        ("B", 75),
        ("C", 68),
        ("D", 65),
        ("E", 79),
        ("F", 81),
    ] {
        input.push_str(&format!("submit\n{name}\n72\n{score}\n"));
    }
    input.push_str("results\nquit\n");

    let out = drive(&input, &mut session);

    let top_start = out.find("Top 5 scores:").expect("results page printed");
    let page = &out[top_start..];
    let top_section = &page[..page.find("All Score Cards").unwrap()];
    assert!(top_section.contains("1. Course: D, Par: 72, Actual Score: 65, Relative Score: -7"));
    assert!(top_section.contains("5. Course: E, Par: 72, Actual Score: 79, Relative Score: +7"));
    assert!(!top_section.contains("Course: F"));

    assert!(page.contains("6. Course: F, Par: 72, Actual Score: 81, Relative Score: +9"));
    assert!(page.contains("Low Score: 65"));
    assert!(page.contains("High Score: 81"));
    assert!(page.contains("Average Score: 73"));

    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_overridden_capacity_and_policy() {
    let mut config = ScorecardConfig::default();
    config.apply_overrides(&SessionArgs {
        capacity: Some(2),
        repeatable: true,
    });
    let mut session = config.new_session().unwrap();

    let out = drive(
        "s\nA\n72\n70\ns\nB\n72\n75\ns\nC\n72\n68\nr\nr\nq\n",
        &mut session,
    );

    assert_eq!(out.matches("Top 2 scores:").count(), 2);
    let held: Vec<&str> = session
        .leaderboard()
        .iter()
        .map(Scorecard::course_name)
        .collect();
    assert_eq!(held, vec!["C", "A"]);
    assert!(session.can_submit());
}

#[test]
fn test_errors_do_not_end_the_form() {
    let mut session = Session::default();
    let out = drive(
        "r\ns\n\n72\n70\ns\nAugusta\n72.5\n70\ns\nAugusta\n72\n70\nr\n",
        &mut session,
    );

    assert!(out.contains("Error: No scorecards have been recorded yet"));
    assert!(out.contains("Error: Validation error: Course name must not be empty"));
    assert!(out.contains("Error: Course par must be an integer, got '72.5'"));
    assert!(out.contains("Scorecard recorded: Course: Augusta"));
    assert!(out.contains("Average Score: 70"));
    assert_eq!(session.scorecards().len(), 1);
}
