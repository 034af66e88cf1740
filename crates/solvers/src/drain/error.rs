use tubedrain_core::constraint::ConstraintError;
use tubedrain_model::FlowError;

/// Errors that can occur during a drain run.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("tube length is invalid: {0}")]
    TubeLength(#[source] ConstraintError),

    #[error("step {step} failed: {source}")]
    Flow {
        step: usize,
        #[source]
        source: FlowError,
    },
}
