//! Line-oriented scorecard entry form.
//!
//! A terminal take on a three-button entry window: submit a
//! scorecard, show results, or quit. Reads from any [`BufRead`] and writes to
//! any [`Write`], so the whole conversation can be driven from a buffer.

use std::io::{BufRead, Write};
use std::str::FromStr;

use scorecard_core::Session;
use tracing::{debug, info};

use crate::error::{Error, Result};

const ACTION_PROMPT: &str = "Action [submit/results/quit]:";
const NAME_PROMPT: &str = "Enter course name:";
const PAR_PROMPT: &str = "Enter course par:";
const SCORE_PROMPT: &str = "Enter your actual score:";

/// Something the user can do from the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter one scorecard
    Submit,
    /// Show the results page
    Results,
    /// List the actions
    Help,
    /// Leave immediately
    Quit,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "submit" => Ok(Action::Submit),
            "r" | "results" => Ok(Action::Results),
            "h" | "help" | "?" => Ok(Action::Help),
            "q" | "quit" | "exit" => Ok(Action::Quit),
            _ => Err(Error::UnknownAction(s.trim().to_string())),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The interactive form bound to an input and an output.
pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    /// Creates a form reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs until the user quits or the input ends.
    ///
    /// Input and session errors are shown to the user; only I/O failures end
    /// the loop with an error.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        writeln!(self.output, "Golf Score Tracker")?;

        loop {
            let Some(line) = self.prompt(ACTION_PROMPT)? else {
                debug!("Input closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse::<Action>() {
                Ok(Action::Submit) => self.submit(session)?,
                Ok(Action::Results) => self.results(session)?,
                Ok(Action::Help) => self.help()?,
                Ok(Action::Quit) => Flow::Quit,
                Err(e) => {
                    writeln!(self.output, "Error: {e}")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        info!(recorded = session.scorecards().len(), "Form closed");
        Ok(())
    }

    /// Consumes the form and returns the output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn submit(&mut self, session: &mut Session) -> Result<Flow> {
        if !session.can_submit() {
            writeln!(self.output, "Error: {}", scorecard_core::Error::SubmissionsClosed)?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(Flow::Quit);
        };
        let Some(par) = self.prompt(PAR_PROMPT)? else {
            return Ok(Flow::Quit);
        };
        let Some(score) = self.prompt(SCORE_PROMPT)? else {
            return Ok(Flow::Quit);
        };

        match session.submit(&name, &par, &score) {
            Ok(_) => {
                if let Some(card) = session.scorecards().last() {
                    writeln!(self.output, "Scorecard recorded: {card}")?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn results(&mut self, session: &mut Session) -> Result<Flow> {
        match session.show_results() {
            Ok(report) => {
                writeln!(self.output)?;
                write!(self.output, "{report}")?;
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<Flow> {
        writeln!(self.output, "  submit (s)   enter a scorecard")?;
        writeln!(self.output, "  results (r)  show the leaderboard and statistics")?;
        writeln!(self.output, "  quit (q)     leave without saving")?;
        Ok(Flow::Continue)
    }

    /// Writes `label`, then reads one line. `None` means the input ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and then fail field validation.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
