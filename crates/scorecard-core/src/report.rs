//! The results page: leaderboard, alphabetical listing, and statistics.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::sort::sort_by_name;
use crate::stats::Summary;
use crate::types::Scorecard;

/// Everything shown when results are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Size of the leaderboard the top list came from
    pub capacity: usize,
    /// Leaderboard contents, best first
    pub top: Vec<Scorecard>,
    /// Every recorded scorecard, ordered by course name
    pub by_name: Vec<Scorecard>,
    /// Statistics over every recorded scorecard
    pub summary: Summary,
}

impl Report {
    /// Builds a report from the leaderboard contents and the full record list.
    pub fn new(capacity: usize, top: Vec<Scorecard>, scorecards: &[Scorecard]) -> Self {
        Self {
            capacity,
            top,
            by_name: sort_by_name(scorecards),
            summary: Summary::from_scorecards(scorecards),
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} scores:", self.capacity)?;
        for (i, card) in self.top.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, card)?;
        }

        writeln!(f)?;
        writeln!(f, "All Score Cards Sorted Alphabetically")?;
        for (i, card) in self.by_name.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, card)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Low Score: {}",
            NotAvailable(self.summary.low.as_ref().map(Scorecard::actual_score))
        )?;
        writeln!(
            f,
            "High Score: {}",
            NotAvailable(self.summary.high.as_ref().map(Scorecard::actual_score))
        )?;
        writeln!(f, "Average Score: {}", NotAvailable(self.summary.average))
    }
}

struct NotAvailable<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for NotAvailable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("N/A"),
        }
    }
}
