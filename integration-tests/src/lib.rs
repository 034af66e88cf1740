//! Shared fixtures for cross-crate scenario tests.

use tubedrain_model::{DrainConfig, DrainParameters};
use uom::si::{f64::Length, length::meter};

/// Tube lengths run by the bench sweep, in meters.
pub const BENCH_LENGTHS: [f64; 4] = [0.2, 0.3, 0.4, 0.6];

/// Returns the validated bench parameters.
///
/// # Panics
///
/// Panics if the bench config stops validating.
#[must_use]
pub fn bench_parameters() -> DrainParameters {
    DrainParameters::new(DrainConfig::default()).expect("bench config is valid")
}

#[must_use]
pub fn meters(value: f64) -> Length {
    Length::new::<meter>(value)
}
