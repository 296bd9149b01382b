//! The scorecard record.

use serde::Serialize;

use crate::error::{Error, Result};

/// Field label used in errors about the course par.
pub const PAR_FIELD: &str = "Course par";

/// Field label used in errors about the actual score.
pub const SCORE_FIELD: &str = "Actual score";

/// A single recorded round: where it was played, the par, and the score.
///
/// The relative score is derived at construction and a scorecard is never
/// mutated afterwards, so it always equals `actual_score - course_par`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Scorecard {
    course_name: String,
    course_par: u32,
    actual_score: u32,
    relative_score: i64,
}

impl Scorecard {
    /// Creates a scorecard from already-validated numbers.
    ///
    /// The course name is trimmed and must not be empty.
    pub fn new<S: AsRef<str>>(course_name: S, course_par: u32, actual_score: u32) -> Result<Self> {
        let course_name = course_name.as_ref().trim();
        if course_name.is_empty() {
            return Err(Error::validation_field(
                "course_name",
                "Course name must not be empty",
            ));
        }

        Ok(Self {
            course_name: course_name.to_string(),
            course_par,
            actual_score,
            relative_score: i64::from(actual_score) - i64::from(course_par),
        })
    }

    /// Creates a scorecard from raw form text.
    ///
    /// Par is checked before the score, and the first bad field is reported.
    pub fn parse(course_name: &str, course_par: &str, actual_score: &str) -> Result<Self> {
        let course_par = parse_non_negative(PAR_FIELD, course_par)?;
        let actual_score = parse_non_negative(SCORE_FIELD, actual_score)?;
        Self::new(course_name, course_par, actual_score)
    }

    /// Returns the course name.
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// Returns the course par.
    pub fn course_par(&self) -> u32 {
        self.course_par
    }

    /// Returns the actual score.
    pub fn actual_score(&self) -> u32 {
        self.actual_score
    }

    /// Returns the score relative to par. Negative is under par.
    pub fn relative_score(&self) -> i64 {
        self.relative_score
    }

    /// Returns `true` if this round was under par.
    pub fn is_under_par(&self) -> bool {
        self.relative_score < 0
    }
}

impl std::fmt::Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.relative_score >= 0 { "+" } else { "" };
        write!(
            f,
            "Course: {}, Par: {}, Actual Score: {}, Relative Score: {}{}",
            self.course_name, self.course_par, self.actual_score, sign, self.relative_score
        )
    }
}

fn parse_non_negative(field: &'static str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::invalid_integer(field, trimmed))?;
    if value < 0 {
        return Err(Error::NegativeValue { field, value });
    }
    u32::try_from(value).map_err(|_| Error::invalid_integer(field, trimmed))
}
