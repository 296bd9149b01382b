//! Configuration file for golf-scorecard.
//!
//! The file is optional. Resolution order for its location:
//! 1. `--config <path>` or the `GOLF_SCORECARD_CONFIG` environment variable
//! 2. `<platform config dir>/golf-scorecard/config.toml`
//!
//! An explicit path must exist; a missing default file means defaults.

use std::path::{Path, PathBuf};

use scorecard_core::{ResultsPolicy, Session};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::SessionArgs;
use crate::error::{Error, Result};

/// Loading, locating and serializing a TOML configuration type.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Directory name used under the platform config directory.
    fn project_name() -> &'static str;

    /// The platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// The explicit path if given, else the platform default.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration, falling back to defaults when no default file exists.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found at {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Reads and parses a config file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorecardConfig {
    /// Leaderboard settings
    pub leaderboard: LeaderboardConfig,
    /// Session settings
    pub session: SessionConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// `[leaderboard]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Number of rounds kept on the leaderboard
    pub capacity: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            capacity: Session::DEFAULT_CAPACITY,
        }
    }
}

/// `[session]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether results can be shown once or repeatedly
    pub results: ResultsPolicy,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConfigManager for ScorecardConfig {
    fn project_name() -> &'static str {
        "golf-scorecard"
    }
}

impl ScorecardConfig {
    /// Loads the configuration, or defaults if it is missing or unreadable.
    ///
    /// Used by the `config` commands, which must still run when the file is
    /// broken so that it can be inspected and repaired.
    pub fn load_or_default(explicit: Option<&str>) -> Self {
        Self::load(explicit).unwrap_or_default()
    }

    /// Applies command-line overrides on top of the file values.
    pub fn apply_overrides(&mut self, args: &SessionArgs) {
        if let Some(capacity) = args.capacity {
            self.leaderboard.capacity = capacity;
        }
        if args.repeatable {
            self.session.results = ResultsPolicy::Repeatable;
        }
    }

    /// Creates a session with the configured leaderboard size and policy.
    pub fn new_session(&self) -> Result<Session> {
        Ok(Session::new(
            self.leaderboard.capacity,
            self.session.results,
        )?)
    }
}
