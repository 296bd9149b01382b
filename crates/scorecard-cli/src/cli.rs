//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "GOLF_SCORECARD_CONFIG";

/// Golf Score Tracker - record rounds, then show the leaderboard and statistics
#[derive(Parser, Debug)]
#[command(name = "golf-scorecard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands. Running with none starts the interactive form.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Enter scorecards interactively (the default)
    Form(SessionArgs),

    /// Print results for scorecards given on the command line
    Report(ReportArgs),

    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options that shape a session, overriding the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Number of rounds kept on the leaderboard
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Allow results to be shown more than once
    #[arg(long)]
    pub repeatable: bool,
}

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// A round as NAME,PAR,SCORE (repeatable; NAME may contain commas)
    #[arg(long = "card", value_name = "NAME,PAR,SCORE", required = true)]
    pub cards: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of rounds kept on the leaderboard
    #[arg(long)]
    pub capacity: Option<usize>,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text results page
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `leaderboard.capacity`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },

    /// Write a default config file
    Init {
        /// Where to write it (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
