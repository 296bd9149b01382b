//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs the global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `level` is used, raised to `debug`
/// when `verbose` is on.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| build_filter(level, verbose))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install logger: {e}")))
}

/// Builds the filter used when `RUST_LOG` is not set.
pub fn build_filter(level: &str, verbose: bool) -> Result<EnvFilter> {
    let directive = if verbose { "debug" } else { level };
    EnvFilter::try_new(directive)
        .map_err(|e| Error::config(format!("Invalid logging level '{directive}': {e}")))
}
