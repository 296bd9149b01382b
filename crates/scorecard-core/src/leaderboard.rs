//! Bounded leaderboard of the best rounds relative to par.
//!
//! Entries are kept sorted by `(relative_score, insertion order)`, so the
//! best round is at the front and the worst at the back. When the board is
//! full, a new round only gets in if it is strictly better than the worst
//! held round; on a tie the earlier round keeps its place.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Scorecard;

/// Default number of rounds kept on a leaderboard.
pub const DEFAULT_CAPACITY: usize = 5;

/// What happened to a scorecard offered to a [`Leaderboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferOutcome {
    /// There was room, so the scorecard was added.
    Admitted,

    /// The board was full and the scorecard displaced the worst entry.
    Replaced {
        /// The entry that fell off the board
        evicted: Scorecard,
    },

    /// The board was full and the scorecard was not better than the worst entry.
    Rejected,
}

impl OfferOutcome {
    /// Returns `true` if the offered scorecard is now on the board.
    pub fn is_retained(&self) -> bool {
        !matches!(self, OfferOutcome::Rejected)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    scorecard: Scorecard,
}

/// A fixed-capacity, always-sorted collection of the best scorecards.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    capacity: usize,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard holding at most `capacity` scorecards.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        Ok(Self {
            capacity,
            next_seq: 0,
            entries: Vec::new(),
        })
    }

    /// Offers a scorecard to the board.
    pub fn offer(&mut self, scorecard: Scorecard) -> OfferOutcome {
        let entry = Entry {
            seq: self.next_seq,
            scorecard,
        };
        self.next_seq += 1;

        if self.entries.len() < self.capacity {
            debug!(
                course = entry.scorecard.course_name(),
                relative = entry.scorecard.relative_score(),
                "Admitted to leaderboard"
            );
            self.insert_sorted(entry);
            return OfferOutcome::Admitted;
        }

        let worst = match self.entries.last() {
            Some(worst) => worst.scorecard.relative_score(),
            None => return OfferOutcome::Rejected,
        };

        if entry.scorecard.relative_score() < worst {
            let evicted = self.entries.pop().map(|e| e.scorecard);
            debug!(
                course = entry.scorecard.course_name(),
                relative = entry.scorecard.relative_score(),
                evicted_relative = worst,
                "Replaced worst leaderboard entry"
            );
            self.insert_sorted(entry);
            match evicted {
                Some(evicted) => OfferOutcome::Replaced { evicted },
                None => OfferOutcome::Admitted,
            }
        } else {
            debug!(
                course = entry.scorecard.course_name(),
                relative = entry.scorecard.relative_score(),
                worst,
                "Rejected from full leaderboard"
            );
            OfferOutcome::Rejected
        }
    }

    /// Removes and returns the worst entry, if any.
    pub fn remove_worst(&mut self) -> Option<Scorecard> {
        self.entries.pop().map(|e| e.scorecard)
    }

    /// Returns up to `n` scorecards best-first and empties the board.
    ///
    /// Entries beyond the first `n` are discarded along with the rest.
    pub fn drain_sorted(&mut self, n: usize) -> Vec<Scorecard> {
        let held = self.entries.len();
        let top: Vec<Scorecard> = self.entries.drain(..).take(n).map(|e| e.scorecard).collect();
        if held > top.len() {
            debug!(
                discarded = held - top.len(),
                "Leaderboard drain discarded entries"
            );
        }
        top
    }

    /// Returns every held scorecard best-first, leaving the board intact.
    pub fn peek_sorted(&self) -> Vec<Scorecard> {
        self.iter().cloned().collect()
    }

    /// Iterates over held scorecards best-first.
    pub fn iter(&self) -> impl Iterator<Item = &Scorecard> {
        self.entries.iter().map(|e| &e.scorecard)
    }

    /// Returns the best held scorecard.
    pub fn best(&self) -> Option<&Scorecard> {
        self.entries.first().map(|e| &e.scorecard)
    }

    /// Returns the worst held scorecard.
    pub fn worst(&self) -> Option<&Scorecard> {
        self.entries.last().map(|e| &e.scorecard)
    }

    /// Returns the number of held scorecards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the board is at capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns the maximum number of scorecards the board holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Equal relative scores stay in insertion order: seq only grows.
    fn insert_sorted(&mut self, entry: Entry) {
        let relative = entry.scorecard.relative_score();
        let at = self
            .entries
            .partition_point(|e| e.scorecard.relative_score() <= relative);
        self.entries.insert(at, entry);
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}
