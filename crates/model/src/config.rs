use serde::{Deserialize, Serialize};
use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{Acceleration, DynamicViscosity, Length, MassDensity, Ratio, Time},
    length::meter,
    mass_density::gram_per_cubic_centimeter,
    ratio::ratio,
    time::second,
};

/// Raw configuration for a drain experiment.
///
/// Values are not checked here; pass the config to
/// [`DrainParameters::new`](crate::DrainParameters::new) to validate it.
///
/// When deserialized, quantities are read as SI base-unit numbers and any
/// missing field falls back to the [`Default`] bench setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrainConfig {
    /// Inside width of the bin.
    pub bin_width: Length,

    /// Inside length of the bin.
    pub bin_length: Length,

    /// Nominal fill height of the bin.
    pub bin_height: Length,

    /// Height of the tube outlet below the bin floor.
    pub end_height: Length,

    /// Total drop in surface height that completes a run.
    pub total_height_change: Length,

    /// Inside diameter of the drain tube.
    pub tube_diameter: Length,

    pub viscosity: DynamicViscosity,

    pub density: MassDensity,

    pub gravity: Acceleration,

    /// Sine of the tube's incline angle.
    ///
    /// May be zero or negative.
    pub slope: Ratio,

    /// Fixed integration step.
    pub time_step: Time,

    /// Upper bound on simulated time for a single run.
    pub max_time: Time,

    /// Candidate tube lengths, run in this order by a sweep.
    pub tube_lengths: Vec<Length>,
}

impl Default for DrainConfig {
    /// The bench setup: a 0.32 × 0.26 m bin of water draining through a
    /// 5/16" tube on a 1:150 grade.
    fn default() -> Self {
        Self {
            bin_width: Length::new::<meter>(0.32),
            bin_length: Length::new::<meter>(0.26),
            bin_height: Length::new::<meter>(0.08),
            end_height: Length::new::<meter>(0.02),
            total_height_change: Length::new::<meter>(0.08),
            tube_diameter: Length::new::<meter>(0.00794),
            viscosity: DynamicViscosity::new::<pascal_second>(8.90e-4),
            density: MassDensity::new::<gram_per_cubic_centimeter>(1.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
            slope: Ratio::new::<ratio>(1.0 / 150.0),
            time_step: Time::new::<second>(0.1),
            max_time: Time::new::<second>(500.0),
            tube_lengths: [0.2, 0.3, 0.4, 0.6].map(Length::new::<meter>).to_vec(),
        }
    }
}
