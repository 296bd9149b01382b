//! The one-shot `report` command.

use std::io::Write;

use scorecard_core::{ResultsPolicy, Scorecard, Session};
use tracing::debug;

use crate::cli::{OutputFormat, ReportArgs};
use crate::error::{Error, Result};

/// Splits `NAME,PAR,SCORE` from the right, so the name may contain commas.
pub fn parse_card_spec(spec: &str) -> Result<Scorecard> {
    let mut parts = spec.rsplitn(3, ',');
    let (Some(score), Some(par), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::invalid_card(spec, "expected NAME,PAR,SCORE"));
    };
    Scorecard::parse(name, par, score).map_err(|e| Error::invalid_card(spec, e.to_string()))
}

/// Records every `--card` and writes the results page in the chosen format.
pub fn run_report<W: Write>(args: &ReportArgs, capacity: usize, out: &mut W) -> Result<()> {
    let mut session = Session::new(capacity, ResultsPolicy::Repeatable)?;
    for spec in &args.cards {
        let outcome = session.submit_scorecard(parse_card_spec(spec)?)?;
        debug!(card = %spec, ?outcome, "Recorded card");
    }

    let report = session.show_results()?;
    match args.format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json_pretty()?)?,
    }
    Ok(())
}
