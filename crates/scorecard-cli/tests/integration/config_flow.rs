//! Config file lifecycle: init, set, load into a session.

use scorecard_cli::cli::{ConfigAction, OutputFormat, ReportArgs};
use scorecard_cli::commands::run_report;
use scorecard_cli::config::{ConfigManager, ScorecardConfig};
use scorecard_cli::config_handlers::handle_config_command;
use scorecard_core::ResultsPolicy;

#[test]
fn test_init_set_then_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path_str = path.to_str().unwrap();

    handle_config_command(
        Some(path_str),
        ConfigAction::Init {
            file: None,
            force: false,
        },
        &mut Vec::new(),
    )
    .unwrap();

    for (key, value) in [("leaderboard.capacity", "3"), ("session.results", "repeatable")] {
        let mut out = Vec::new();
        handle_config_command(
            Some(path_str),
            ConfigAction::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            &mut out,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with(&format!("Set {key} = {value}")));
    }

    let mut out = Vec::new();
    handle_config_command(
        Some(path_str),
        ConfigAction::Get {
            key: "leaderboard.capacity".to_string(),
        },
        &mut out,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3\n");

    let config = ScorecardConfig::load(Some(path_str)).unwrap();
    let session = config.new_session().unwrap();
    assert_eq!(session.leaderboard().capacity(), 3);
    assert_eq!(session.policy(), ResultsPolicy::Repeatable);
}

#[test]
fn test_set_unknown_policy_is_refused() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    handle_config_command(
        Some(path_str),
        ConfigAction::Init {
            file: None,
            force: false,
        },
        &mut Vec::new(),
    )
    .unwrap();

    let result = handle_config_command(
        Some(path_str),
        ConfigAction::Set {
            key: "session.results".to_string(),
            value: "sometimes".to_string(),
        },
        &mut Vec::new(),
    );
    assert!(result.is_err());

    let config = ScorecardConfig::load(Some(path_str)).unwrap();
    assert_eq!(config.session.results, ResultsPolicy::Once);
}

#[test]
fn test_report_with_configured_capacity() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[leaderboard]\ncapacity = 1\n").unwrap();

    let config = ScorecardConfig::load(path.to_str()).unwrap();
    let args = ReportArgs {
        cards: vec!["Augusta,72,70".to_string(), "Torrey,72,68".to_string()],
        format: OutputFormat::Text,
        capacity: None,
    };

    let mut out = Vec::new();
    run_report(&args, args.capacity.unwrap_or(config.leaderboard.capacity), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Top 1 scores:\n1. Course: Torrey"));
    assert!(text.contains("All Score Cards Sorted Alphabetically\n1. Course: Augusta"));
    assert!(text.contains("2. Course: Torrey"));
}
