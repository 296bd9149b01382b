//! Core types for scorecard sessions.

mod proptests;
mod scorecard;
mod session_state;

pub use scorecard::{PAR_FIELD, SCORE_FIELD, Scorecard};
pub use session_state::{ResultsPolicy, SessionState};
