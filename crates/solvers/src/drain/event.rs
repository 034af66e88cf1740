use super::Record;

/// Event emitted by the drain solver after each completed step.
///
/// Steps are numbered from zero, matching the record's index in
/// [`Solution::history`](super::Solution::history).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Index of the step that produced `record`.
    pub step: usize,

    /// The record appended for this step.
    pub record: Record,
}
