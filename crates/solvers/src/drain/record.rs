use uom::si::{
    f64::{Length, Time, Velocity, Volume},
    length::meter,
    time::second,
    velocity::meter_per_second,
    volume::cubic_meter,
};

/// State captured at the end of one drain step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Elapsed time at the start of the step.
    pub time: Time,

    /// Surface descent rate measured over this step (`dh / dt`).
    ///
    /// Used as the approach velocity of the next step.
    pub v1: Velocity,

    /// Outflow velocity evaluated from the head at the start of the step.
    pub v2: Velocity,

    /// Surface height above the tube outlet after the step.
    pub height: Length,

    /// Fluid remaining in the bin and tube after the step.
    pub volume: Volume,

    /// Height lost during the step.
    pub height_delta: Length,

    /// Volume expelled during the step.
    pub volume_delta: Volume,
}

impl Record {
    /// Returns `(t, v1, v2, h, V, dh, dV)` in SI base units.
    #[must_use]
    pub fn as_si_tuple(&self) -> (f64, f64, f64, f64, f64, f64, f64) {
        (
            self.time.get::<second>(),
            self.v1.get::<meter_per_second>(),
            self.v2.get::<meter_per_second>(),
            self.height.get::<meter>(),
            self.volume.get::<cubic_meter>(),
            self.height_delta.get::<meter>(),
            self.volume_delta.get::<cubic_meter>(),
        )
    }
}
