//! Solvers for draining a bin through a tube.
//!
//! - [`drain`] — time-marches a single tube length to a stop condition
//! - [`sweep`] — runs [`drain`] once per candidate tube length

pub mod drain;
pub mod sweep;

pub use sweep::{SweepError, sweep, sweep_lengths};
