//! Summary statistics over recorded scorecards.

use serde::Serialize;

use crate::types::Scorecard;

/// Low, high and average of the actual scores in a list of scorecards.
///
/// Every field is `None` when there were no scorecards to summarize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// First scorecard with the highest actual score
    pub high: Option<Scorecard>,
    /// First scorecard with the lowest actual score
    pub low: Option<Scorecard>,
    /// Mean actual score, truncated toward zero
    pub average: Option<u32>,
}

impl Summary {
    /// Scans the scorecards once and builds the summary.
    ///
    /// Ties for high or low go to the earliest scorecard in list order.
    pub fn from_scorecards(scorecards: &[Scorecard]) -> Self {
        let mut high: Option<&Scorecard> = None;
        let mut low: Option<&Scorecard> = None;
        let mut total: u64 = 0;

        for card in scorecards {
            if high.is_none_or(|h| card.actual_score() > h.actual_score()) {
                high = Some(card);
            }
            if low.is_none_or(|l| card.actual_score() < l.actual_score()) {
                low = Some(card);
            }
            total += u64::from(card.actual_score());
        }

        let average = match scorecards.len() as u64 {
            0 => None,
            count => u32::try_from(total / count).ok(),
        };

        Self {
            high: high.cloned(),
            low: low.cloned(),
            average,
        }
    }

    /// Returns `true` if there was nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.average.is_none()
    }
}
