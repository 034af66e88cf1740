//! Physical parameters for draining a rectangular bin through a tube.
//!
//! - [`DrainConfig`] — raw, deserializable configuration with a bench default
//! - [`DrainParameters`] — validated parameters and the geometry derived from them
//! - [`Termination`] — stop criteria for a single run
//! - [`flow`] — the efflux relation and the Reynolds number diagnostic

mod config;
pub mod flow;
mod parameters;
mod termination;

pub use config::DrainConfig;
pub use flow::{FlowError, reynolds_number};
pub use parameters::{DrainParameters, ParameterError};
pub use termination::{Termination, TerminationError};
