#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Scorecard Core Library
//!
//! Scorecards, the bounded leaderboard, alphabetical ordering, summary
//! statistics, and the session that ties them together.

pub mod error;
pub mod leaderboard;
pub mod report;
pub mod session;
pub mod sort;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use leaderboard::{Leaderboard, OfferOutcome};
pub use report::Report;
pub use session::Session;
pub use sort::sort_by_name;
pub use stats::Summary;
pub use types::{ResultsPolicy, Scorecard, SessionState};
