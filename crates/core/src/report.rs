//! Hand-off point for finished-game summaries.
//! Storage and statistics live with whoever implements `OutcomeReporter`;
//! the engine only guarantees it calls `report` at most once per game.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::types::GameSummary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("outcome report failed: {0}")]
pub struct ReportError(pub String);

pub trait OutcomeReporter {
    fn report(&mut self, summary: &GameSummary) -> Result<(), ReportError>;
}

impl<F> OutcomeReporter for F
where
    F: FnMut(&GameSummary) -> Result<(), ReportError>,
{
    fn report(&mut self, summary: &GameSummary) -> Result<(), ReportError> {
        self(summary)
    }
}

/// Keeps every summary in memory. Clones share the same buffer, so a caller
/// can hand one clone to a `Game` and read results through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryReporter {
    summaries: Rc<RefCell<Vec<GameSummary>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summaries(&self) -> Vec<GameSummary> {
        self.summaries.borrow().clone()
    }
}

impl OutcomeReporter for MemoryReporter {
    fn report(&mut self, summary: &GameSummary) -> Result<(), ReportError> {
        self.summaries.borrow_mut().push(*summary);
        Ok(())
    }
}
