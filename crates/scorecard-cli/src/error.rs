//! Error types for scorecard-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for scorecard-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scorecard-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from scorecard-core
    #[error(transparent)]
    Core(#[from] scorecard_core::Error),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File I/O failed for a known path
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// The file or directory involved
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be found, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A `--card` argument was not of the form `NAME,PAR,SCORE`
    #[error("Invalid card '{spec}': {message}")]
    InvalidCard {
        /// The argument as given
        spec: String,
        /// What went wrong
        message: String,
    },

    /// The form did not recognise an action
    #[error("Unknown action '{0}' (try 'help')")]
    UnknownAction(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid-card error.
    pub fn invalid_card<S: Into<String>, M: Into<String>>(spec: S, message: M) -> Self {
        Error::InvalidCard {
            spec: spec.into(),
            message: message.into(),
        }
    }
}
