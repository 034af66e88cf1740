use std::f64::consts::PI;

use thiserror::Error;
use tubedrain_core::constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive};
use uom::si::f64::{
    Acceleration, Area, DynamicViscosity, Length, MassDensity, Ratio, Time, Velocity, Volume,
};

use crate::{
    DrainConfig, Termination,
    flow::{self, FlowError},
};

/// Validated, immutable physical parameters for a drain experiment.
///
/// Built once from a [`DrainConfig`] and shared by reference with every run.
/// All derived geometry is computed on demand from these values.
#[derive(Debug, Clone, PartialEq)]
pub struct DrainParameters {
    bin_width: Length,
    bin_length: Length,
    bin_height: Length,
    end_height: Length,
    total_height_change: Length,
    tube_diameter: Length,
    viscosity: DynamicViscosity,
    density: MassDensity,
    gravity: Acceleration,
    slope: Ratio,
    time_step: Time,
    max_time: Time,
    tube_lengths: Vec<Length>,
}

/// Errors that can occur when validating a [`DrainConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("{field} is invalid: {source}")]
    Invalid {
        field: &'static str,
        source: ConstraintError,
    },

    #[error("slope must be finite")]
    NonFiniteSlope,

    #[error("tube length [{index}] is invalid: {source}")]
    TubeLength {
        index: usize,
        source: ConstraintError,
    },
}

impl DrainParameters {
    /// Validates a config and creates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any dimension, fluid property, gravity,
    /// time step, time cap, or tube length is not strictly positive, or if
    /// the slope is not finite.
    pub fn new(config: DrainConfig) -> Result<Self, ParameterError> {
        let DrainConfig {
            bin_width,
            bin_length,
            bin_height,
            end_height,
            total_height_change,
            tube_diameter,
            viscosity,
            density,
            gravity,
            slope,
            time_step,
            max_time,
            tube_lengths,
        } = config;

        if !slope.value.is_finite() {
            return Err(ParameterError::NonFiniteSlope);
        }

        let tube_lengths = tube_lengths
            .into_iter()
            .enumerate()
            .map(|(index, length)| {
                Constrained::<Length, StrictlyPositive>::new(length)
                    .map(Constrained::into_inner)
                    .map_err(|source| ParameterError::TubeLength { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bin_width: positive("bin_width", bin_width)?,
            bin_length: positive("bin_length", bin_length)?,
            bin_height: positive("bin_height", bin_height)?,
            end_height: positive("end_height", end_height)?,
            total_height_change: positive("total_height_change", total_height_change)?,
            tube_diameter: positive("tube_diameter", tube_diameter)?,
            viscosity: positive("viscosity", viscosity)?,
            density: positive("density", density)?,
            gravity: positive("gravity", gravity)?,
            slope,
            time_step: positive("time_step", time_step)?,
            max_time: positive("max_time", max_time)?,
            tube_lengths,
        })
    }

    /// Returns the volume of fluid held by the bin.
    ///
    /// The fill extends from the outlet level, so the end height is included:
    /// `width × length × (height + end_height)`.
    #[must_use]
    pub fn bin_volume(&self) -> Volume {
        self.bin_width * self.bin_length * (self.bin_height + self.end_height)
    }

    /// Returns the bin's horizontal footprint.
    #[must_use]
    pub fn bin_footprint(&self) -> Area {
        self.bin_width * self.bin_length
    }

    /// Returns the tube's cross-sectional flow area.
    #[must_use]
    pub fn pipe_area(&self) -> Area {
        0.25 * PI * self.tube_diameter * self.tube_diameter
    }

    /// Returns the volume of fluid held by a full tube of the given length.
    #[must_use]
    pub fn tube_volume(&self, length: Length) -> Volume {
        self.pipe_area() * length
    }

    /// Returns the initial surface height relative to the tube outlet.
    ///
    /// An inclined tube drops its outlet by `slope × length`, so longer tubes
    /// start with more head.
    #[must_use]
    pub fn start_height(&self, length: Length) -> Length {
        self.slope * length + (self.end_height + self.total_height_change)
    }

    /// Returns the outflow velocity for a surface descending at `v1` over `height`.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] if `height` is negative or NaN.
    pub fn velocity_v2(&self, v1: Velocity, height: Length) -> Result<Velocity, FlowError> {
        flow::outflow_velocity(v1, height, self.gravity)
    }

    /// Returns the Reynolds number of the configured fluid moving through the
    /// tube at `velocity`.
    #[must_use]
    pub fn tube_reynolds_number(&self, velocity: Velocity) -> Ratio {
        flow::reynolds_number(self.density, velocity, self.tube_diameter, self.viscosity)
    }

    /// Returns the default stop criteria: the configured total height change
    /// and time cap.
    #[must_use]
    pub fn termination(&self) -> Termination {
        Termination::from_validated(self.total_height_change, self.max_time)
    }

    #[must_use]
    pub fn bin_width(&self) -> Length {
        self.bin_width
    }

    #[must_use]
    pub fn bin_length(&self) -> Length {
        self.bin_length
    }

    #[must_use]
    pub fn tube_diameter(&self) -> Length {
        self.tube_diameter
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    #[must_use]
    pub fn slope(&self) -> Ratio {
        self.slope
    }

    /// Returns the fixed integration step.
    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    /// Returns the candidate tube lengths in sweep order.
    #[must_use]
    pub fn tube_lengths(&self) -> &[Length] {
        &self.tube_lengths
    }
}

fn positive<T>(field: &'static str, value: T) -> Result<T, ParameterError>
where
    StrictlyPositive: Constraint<T>,
{
    Constrained::<T, StrictlyPositive>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| ParameterError::Invalid { field, source })
}
