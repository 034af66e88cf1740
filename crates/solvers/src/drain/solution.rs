use uom::si::f64::{Length, Time};

use super::Record;

/// Indicates how a drain run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The cumulative height drop reached its target.
    Converged,

    /// The elapsed time reached the simulated-time cap.
    TimeLimit,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a drain run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Length of the tube this run simulated.
    pub tube_length: Length,

    /// Surface height above the outlet before the first step.
    pub start_height: Length,

    /// Simulated time covered by the completed steps.
    pub elapsed: Time,

    /// Sum of the per-step height drops.
    pub total_drop: Length,

    /// One record per completed step, in order.
    pub history: Vec<Record>,
}

impl Solution {
    /// Returns `true` if the run reached its height-drop target.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    /// Returns the last record, if any step was taken.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.history.last()
    }
}
