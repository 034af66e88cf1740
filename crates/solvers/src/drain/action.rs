/// What an observer may ask of a drain run after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run with [`Status::StoppedByObserver`](super::Status::StoppedByObserver),
    /// keeping the step just observed.
    StopEarly,
}
