//! One-shot emission of the finished-game summary.

use log::{info, warn};

use super::*;

impl Game {
    /// Sends the summary of a finished game to the configured reporter.
    /// Returns `true` only for the call that actually emitted it; later calls,
    /// and calls while the game is still active, do nothing. A failing
    /// reporter is logged and otherwise ignored.
    pub fn report_outcome(&mut self) -> bool {
        if self.summary_emitted {
            return false;
        }
        let Some(summary) = self.summary() else {
            return false;
        };
        self.summary_emitted = true;

        info!("game finished: {:?} with score {}", summary.result, summary.score);
        if let Some(reporter) = self.reporter.as_mut()
            && let Err(err) = reporter.report(&summary)
        {
            warn!("{err}");
        }
        true
    }

    pub fn outcome_reported(&self) -> bool {
        self.summary_emitted
    }
}
