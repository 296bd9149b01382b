//! Alphabetical ordering of scorecards.

use crate::types::Scorecard;

/// Returns the scorecards ordered by course name.
///
/// Names compare byte-wise, so the order is case-sensitive (`"Z"` sorts
/// before `"a"`). Scorecards with the same name keep their input order.
pub fn sort_by_name(scorecards: &[Scorecard]) -> Vec<Scorecard> {
    let mut sorted = scorecards.to_vec();
    sorted.sort_by(|a, b| a.course_name().cmp(b.course_name()));
    sorted
}
