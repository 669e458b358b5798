//! Closure Statistics Module
//!
//! Counts closure tasks and how each of them ended.

use serde::Serialize;

use crate::tasks::ClosureOutcome;

// == Closure Stats ==
/// Tracks closure task outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClosureStats {
    /// Closure tasks spawned
    pub scheduled: u64,
    /// Auctions moved to completed
    pub completed: u64,
    /// Timer fired but the auction was no longer active
    pub already_closed: u64,
    /// Governing context cancelled before the timer fired
    pub cancelled: u64,
    /// Closing write failed
    pub failed: u64,
}

impl ClosureStats {
    // == Constructor ==
    /// Creates a new ClosureStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Scheduled ==
    pub fn record_scheduled(&mut self) {
        self.scheduled += 1;
    }

    // == Record Outcome ==
    /// Increments the counter matching a finished task.
    pub fn record_outcome(&mut self, outcome: ClosureOutcome) {
        match outcome {
            ClosureOutcome::Completed => self.completed += 1,
            ClosureOutcome::AlreadyClosed => self.already_closed += 1,
            ClosureOutcome::Cancelled => self.cancelled += 1,
            ClosureOutcome::Failed => self.failed += 1,
        }
    }

    // == Pending ==
    /// Tasks scheduled but not finished yet.
    pub fn pending(&self) -> u64 {
        let finished = self.completed + self.already_closed + self.cancelled + self.failed;
        self.scheduled.saturating_sub(finished)
    }
}
