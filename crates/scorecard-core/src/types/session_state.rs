//! Session state tracking types.

use serde::{Deserialize, Serialize};

/// Where a session is in its submit/results lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SessionState {
    /// Nothing has been submitted yet; results are unavailable.
    Empty,

    /// At least one scorecard is recorded; results are available.
    Collecting,

    /// Results were shown in a one-shot session; nothing more is accepted.
    Closed,
}

impl SessionState {
    /// Returns `true` if new scorecards are accepted.
    pub fn accepts_submissions(&self) -> bool {
        !matches!(self, SessionState::Closed)
    }

    /// Returns `true` if results can be requested.
    pub fn has_results(&self) -> bool {
        matches!(self, SessionState::Collecting)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Empty => write!(f, "empty"),
            SessionState::Collecting => write!(f, "collecting"),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}

/// How many times results may be shown in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsPolicy {
    /// Results are shown once: the leaderboard is drained and the session closes.
    #[default]
    Once,

    /// Results may be shown any number of times and submissions stay open.
    Repeatable,
}

impl std::fmt::Display for ResultsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultsPolicy::Once => write!(f, "once"),
            ResultsPolicy::Repeatable => write!(f, "repeatable"),
        }
    }
}

impl std::str::FromStr for ResultsPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(ResultsPolicy::Once),
            "repeatable" => Ok(ResultsPolicy::Repeatable),
            other => Err(crate::Error::validation_field(
                "results",
                format!("unknown results policy '{other}', expected 'once' or 'repeatable'"),
            )),
        }
    }
}
