//! Runs the drain solver once per candidate tube length.
//!
//! Runs are independent: they share only the read-only parameter set and
//! stop criteria, and results keep the order of the input lengths.

use log::info;
use thiserror::Error;
use tubedrain_model::{DrainParameters, Termination};
use uom::si::{f64::Length, length::meter, time::second};

use crate::drain::{self, Solution};

/// Errors that can occur during a sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("run {index} ({} m tube) failed: {source}", .tube_length.get::<meter>())]
    Run {
        index: usize,
        tube_length: Length,
        #[source]
        source: drain::Error,
    },
}

/// Runs every configured tube length.
///
/// # Errors
///
/// Returns a [`SweepError`] for the first run that fails.
pub fn sweep(
    params: &DrainParameters,
    termination: &Termination,
) -> Result<Vec<Solution>, SweepError> {
    sweep_lengths(params, params.tube_lengths(), termination)
}

/// Runs the given tube lengths in order.
///
/// # Errors
///
/// Returns a [`SweepError`] for the first run that fails.
pub fn sweep_lengths(
    params: &DrainParameters,
    lengths: &[Length],
    termination: &Termination,
) -> Result<Vec<Solution>, SweepError> {
    lengths
        .iter()
        .enumerate()
        .map(|(index, &length)| {
            let solution = drain::solve_unobserved(params, length, termination).map_err(
                |source| SweepError::Run {
                    index,
                    tube_length: length,
                    source,
                },
            )?;

            info!(
                "{:.2} m tube: {:?} after {} steps ({:.1} s)",
                length.get::<meter>(),
                solution.status,
                solution.steps(),
                solution.elapsed.get::<second>(),
            );

            Ok(solution)
        })
        .collect()
}
