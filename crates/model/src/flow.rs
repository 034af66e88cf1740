use thiserror::Error;
use tubedrain_core::constraint::{Constrained, ConstraintError, NonNegative};
use uom::si::{
    f64::{Acceleration, DynamicViscosity, Length, MassDensity, Ratio, Velocity},
    length::meter,
};

/// Errors that can occur when evaluating the efflux relation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FlowError {
    #[error("relative head must not be negative, got {meters} m")]
    NegativeHead { meters: f64 },

    #[error("relative head is not a number")]
    NotANumber,
}

/// Returns the outflow velocity for a surface descending at `v1` over a head `height`.
///
/// Combines the approach velocity with the gravitational term of Torricelli's law:
///
/// ```text
/// v2 = sqrt(v1² + 2·g·h)
/// ```
///
/// # Errors
///
/// Returns a [`FlowError`] if `height` is negative or NaN.
pub fn outflow_velocity(
    v1: Velocity,
    height: Length,
    gravity: Acceleration,
) -> Result<Velocity, FlowError> {
    let height = Constrained::<Length, NonNegative>::new(height)
        .map_err(|err| match err {
            ConstraintError::Negative => FlowError::NegativeHead {
                meters: height.get::<meter>(),
            },
            _ => FlowError::NotANumber,
        })?
        .into_inner();

    let speed_squared = v1 * v1 + 2.0 * gravity * height;
    Ok(speed_squared.sqrt())
}

/// Returns the Reynolds number `ρ·u·L/μ`.
///
/// A diagnostic only: the drain model does not depend on the flow regime.
#[must_use]
pub fn reynolds_number(
    density: MassDensity,
    velocity: Velocity,
    length: Length,
    viscosity: DynamicViscosity,
) -> Ratio {
    density * velocity * length / viscosity
}
