//! Error types for the scorecard core library.

/// Errors that can occur while recording scorecards or producing results.
///
/// The first three variants are user-input errors: they are reported back to
/// whoever typed the value and never change any state.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A numeric field did not parse as a non-negative integer in range.
    #[error("{field} must be an integer, got '{value}'")]
    InvalidInteger {
        /// Name of the offending field
        field: &'static str,
        /// The text as entered
        value: String,
    },

    /// A numeric field parsed but was below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// The parsed value
        value: i64,
    },

    /// Generic validation failure (for example an empty course name).
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// A leaderboard was requested with room for no scorecards.
    #[error("Leaderboard capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The requested capacity
        capacity: usize,
    },

    /// Results were requested before any scorecard was recorded.
    #[error("No scorecards have been recorded yet")]
    NoScorecards,

    /// Results were requested a second time in a one-shot session.
    #[error("Results have already been shown for this session")]
    ResultsAlreadyShown,

    /// A scorecard was submitted after a one-shot session closed.
    #[error("Submissions are closed once results have been shown")]
    SubmissionsClosed,

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for scorecard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the user can fix this error by correcting their input.
    pub fn is_user_input(&self) -> bool {
        match self {
            Error::InvalidInteger { .. } => true,
            Error::NegativeValue { .. } => true,
            Error::Validation { .. } => true,
            Error::InvalidCapacity { .. } => false,
            Error::NoScorecards => false,
            Error::ResultsAlreadyShown => false,
            Error::SubmissionsClosed => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates an invalid-integer error for the named field.
    pub fn invalid_integer<S: Into<String>>(field: &'static str, value: S) -> Self {
        Error::InvalidInteger {
            field,
            value: value.into(),
        }
    }
}
