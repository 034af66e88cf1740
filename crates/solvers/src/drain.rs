//! Explicit time marching of a bin draining through a tube.
//!
//! Each step evaluates the efflux relation at the current head, removes the
//! expelled volume, and spreads it over the bin footprint to find the new
//! surface height:
//!
//! ```text
//! v2 = sqrt(v1² + 2·g·h)
//! dV = v2 · A_tube · dt
//! dh = dV / (width · length)
//! h  ← h − dh
//! V  ← V − dV
//! v1 ← dh / dt
//! ```
//!
//! The next step's approach velocity `v1` is the measured descent rate of the
//! surface, not a propagated fluid velocity. Tube volume is counted in `V`
//! but not in the height conversion.
//!
//! # Termination
//!
//! Before each step the run stops with [`Status::Converged`] once the
//! cumulative drop reaches the target, or with [`Status::TimeLimit`] once the
//! elapsed time reaches the time cap. A cap shorter than one time step admits
//! no step at all, so its trajectory is empty.
//!
//! # Example
//!
//! ```
//! use tubedrain_model::{DrainConfig, DrainParameters};
//! use tubedrain_solvers::drain;
//! use uom::si::{f64::Length, length::meter};
//!
//! let params = DrainParameters::new(DrainConfig::default()).unwrap();
//! let length = Length::new::<meter>(0.3);
//!
//! let solution = drain::solve_unobserved(&params, length, &params.termination()).unwrap();
//!
//! assert!(solution.converged());
//! ```

mod action;
mod error;
mod event;
mod record;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};

use log::{debug, warn};
use tubedrain_core::{
    Observer,
    constraint::{Constrained, StrictlyPositive},
};
use tubedrain_model::{DrainParameters, Termination};
use uom::{
    ConstZero,
    si::{
        f64::{Length, Time, Velocity},
        length::meter,
        time::second,
    },
};

/// Drains the bin through a tube of the given length.
///
/// The observer receives an [`Event`] after every step and may return
/// [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns [`Error::TubeLength`] if `tube_length` is not strictly positive,
/// or [`Error::Flow`] if the surface falls below the outlet before the run
/// terminates.
pub fn solve<Obs>(
    params: &DrainParameters,
    tube_length: Length,
    termination: &Termination,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let tube_length = Constrained::<Length, StrictlyPositive>::new(tube_length)
        .map_err(Error::TubeLength)?
        .into_inner();

    let dt = params.time_step();
    let pipe_area = params.pipe_area();
    let footprint = params.bin_footprint();
    let max_time = termination.max_time();
    let start_height = params.start_height(tube_length);

    let mut v1 = Velocity::ZERO;
    let mut height = start_height;
    let mut volume = params.bin_volume() + params.tube_volume(tube_length);
    let mut total_drop = Length::ZERO;
    let mut history = Vec::new();

    debug!(
        "draining through a {:.3} m tube: start height {:.4} m, time cap {:.1} s",
        tube_length.get::<meter>(),
        start_height.get::<meter>(),
        max_time.get::<second>(),
    );

    let status = loop {
        if total_drop >= termination.height_drop() {
            break Status::Converged;
        }

        let step = history.len();

        #[allow(clippy::cast_precision_loss)]
        let time = dt * step as f64;

        // A cap shorter than one step admits none.
        if time >= max_time || max_time < dt {
            break Status::TimeLimit;
        }

        let v2 = params
            .velocity_v2(v1, height)
            .map_err(|source| Error::Flow { step, source })?;
        let volume_delta = v2 * pipe_area * dt;
        let height_delta: Length = volume_delta / footprint;

        volume = volume - volume_delta;
        height = height - height_delta;
        v1 = height_delta / dt;
        total_drop = total_drop + height_delta;

        let record = Record {
            time,
            v1,
            v2,
            height,
            volume,
            height_delta,
            volume_delta,
        };
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event { step, record }) {
            break Status::StoppedByObserver;
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let elapsed: Time = dt * history.len() as f64;

    match status {
        Status::Converged => debug!(
            "converged after {} steps ({:.1} s)",
            history.len(),
            elapsed.get::<second>()
        ),
        Status::TimeLimit => warn!(
            "{:.3} m tube hit the {:.1} s time cap after dropping {:.4} m",
            tube_length.get::<meter>(),
            termination.max_time().get::<second>(),
            total_drop.get::<meter>(),
        ),
        Status::StoppedByObserver => debug!("stopped by observer after {} steps", history.len()),
    }

    Ok(Solution {
        status,
        tube_length,
        start_height,
        elapsed,
        total_drop,
        history,
    })
}

/// Drains the bin through a tube of the given length without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(
    params: &DrainParameters,
    tube_length: Length,
    termination: &Termination,
) -> Result<Solution, Error> {
    solve(params, tube_length, termination, ())
}
