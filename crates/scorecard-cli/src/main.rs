//! Golf Scorecard CLI
//!
//! Record rounds interactively or from arguments, then show the leaderboard,
//! alphabetical listing and score statistics.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use scorecard_cli::cli::{Cli, Command, SessionArgs};
use scorecard_cli::commands::run_report;
use scorecard_cli::config::{ConfigManager, LoggingConfig, ScorecardConfig};
use scorecard_cli::config_handlers::handle_config_command;
use scorecard_cli::form::Form;
use scorecard_cli::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Form(SessionArgs::default()));

    match command {
        Command::Form(args) => {
            let mut config = load_config(config_path, cli.verbose)?;
            config.apply_overrides(&args);
            let mut session = config.new_session()?;
            tracing::info!(
                capacity = config.leaderboard.capacity,
                results = %config.session.results,
                "Starting scorecard form"
            );

            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            Form::new(stdin, stdout).run(&mut session)?;
        }
        Command::Report(args) => {
            let config = load_config(config_path, cli.verbose)?;
            let capacity = args.capacity.unwrap_or(config.leaderboard.capacity);
            run_report(&args, capacity, &mut std::io::stdout().lock())?;
        }
        Command::Config { action } => {
            let config = ScorecardConfig::load_or_default(config_path);
            logging::init(&config.logging.level, cli.verbose)
                .or_else(|_| logging::init(&LoggingConfig::default().level, cli.verbose))?;
            handle_config_command(config_path, action, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Loads the config file, then installs logging at its configured level.
fn load_config(config_path: Option<&str>, verbose: bool) -> Result<ScorecardConfig> {
    let config = ScorecardConfig::load(config_path)?;
    logging::init(&config.logging.level, verbose)?;
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}
