//! # scorecard-cli
//!
//! Terminal front end for recording golf scorecards.
//!
//! - Interactive entry form (submit, results, quit)
//! - One-shot reports from `--card` arguments, as text or JSON
//! - Configuration file management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod form;
pub mod logging;

pub use error::{Error, Result};
