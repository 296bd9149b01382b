//! The session context: every piece of mutable state for one run.
//!
//! A [`Session`] owns the full list of recorded scorecards, the bounded
//! leaderboard, and the lifecycle state that decides whether submissions and
//! results are currently allowed.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::leaderboard::{self, Leaderboard, OfferOutcome};
use crate::report::Report;
use crate::types::{ResultsPolicy, Scorecard, SessionState};

/// Recorded scorecards plus the leaderboard built from them.
#[derive(Debug, Clone)]
pub struct Session {
    scorecards: Vec<Scorecard>,
    leaderboard: Leaderboard,
    policy: ResultsPolicy,
    state: SessionState,
}

impl Session {
    /// Default leaderboard size for a session.
    pub const DEFAULT_CAPACITY: usize = leaderboard::DEFAULT_CAPACITY;

    /// Creates an empty session.
    pub fn new(leaderboard_capacity: usize, policy: ResultsPolicy) -> Result<Self> {
        Ok(Self {
            scorecards: Vec::new(),
            leaderboard: Leaderboard::with_capacity(leaderboard_capacity)?,
            policy,
            state: SessionState::Empty,
        })
    }

    /// Validates raw form text and records the scorecard.
    ///
    /// On any error the session is left exactly as it was.
    pub fn submit(
        &mut self,
        course_name: &str,
        course_par: &str,
        actual_score: &str,
    ) -> Result<OfferOutcome> {
        self.ensure_open()?;
        let scorecard = Scorecard::parse(course_name, course_par, actual_score)
            .inspect_err(|e| warn!(error = %e, "Rejected scorecard input"))?;
        self.submit_scorecard(scorecard)
    }

    /// Records an already-built scorecard.
    pub fn submit_scorecard(&mut self, scorecard: Scorecard) -> Result<OfferOutcome> {
        self.ensure_open()?;

        self.scorecards.push(scorecard.clone());
        let outcome = self.leaderboard.offer(scorecard);

        if self.state == SessionState::Empty {
            info!("First scorecard recorded, results available");
            self.state = SessionState::Collecting;
        }
        Ok(outcome)
    }

    /// Builds the results report.
    ///
    /// Under [`ResultsPolicy::Once`] this drains the leaderboard and closes
    /// the session; under [`ResultsPolicy::Repeatable`] nothing changes.
    pub fn show_results(&mut self) -> Result<Report> {
        match self.state {
            SessionState::Empty => return Err(Error::NoScorecards),
            SessionState::Closed => return Err(Error::ResultsAlreadyShown),
            SessionState::Collecting => {}
        }

        let capacity = self.leaderboard.capacity();
        let top = match self.policy {
            ResultsPolicy::Once => {
                let top = self.leaderboard.drain_sorted(capacity);
                self.state = SessionState::Closed;
                info!(recorded = self.scorecards.len(), "Results shown, session closed");
                top
            }
            ResultsPolicy::Repeatable => self.leaderboard.peek_sorted(),
        };

        Ok(Report::new(capacity, top, &self.scorecards))
    }

    /// Returns `true` if a submission would be accepted.
    pub fn can_submit(&self) -> bool {
        self.state.accepts_submissions()
    }

    /// Returns `true` if results can be shown right now.
    pub fn can_show_results(&self) -> bool {
        self.state.has_results()
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the results policy.
    pub fn policy(&self) -> ResultsPolicy {
        self.policy
    }

    /// Returns every recorded scorecard in submission order.
    pub fn scorecards(&self) -> &[Scorecard] {
        &self.scorecards
    }

    /// Returns the leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    fn ensure_open(&self) -> Result<()> {
        if self.can_submit() {
            Ok(())
        } else {
            Err(Error::SubmissionsClosed)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            scorecards: Vec::new(),
            leaderboard: Leaderboard::default(),
            policy: ResultsPolicy::default(),
            state: SessionState::Empty,
        }
    }
}
