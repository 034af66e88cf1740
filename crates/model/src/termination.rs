use thiserror::Error;
use uom::si::f64::{Length, Time};

/// Stop criteria for a single drain run.
///
/// A run stops once the surface has dropped by at least `height_drop`, or
/// once the elapsed simulated time reaches `max_time`.
///
/// Zero or negative thresholds are allowed and stop a run before its first
/// step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Termination {
    height_drop: Length,
    max_time: Time,
}

/// Errors that can occur when creating a [`Termination`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TerminationError {
    #[error("height drop target is not a number")]
    HeightDrop,

    #[error("time cap is not a number")]
    MaxTime,
}

impl Termination {
    /// Creates stop criteria from a height-drop target and a simulated-time cap.
    ///
    /// # Errors
    ///
    /// Returns an error if either threshold is NaN.
    pub fn new(height_drop: Length, max_time: Time) -> Result<Self, TerminationError> {
        if height_drop.value.is_nan() {
            return Err(TerminationError::HeightDrop);
        }
        if max_time.value.is_nan() {
            return Err(TerminationError::MaxTime);
        }

        Ok(Self {
            height_drop,
            max_time,
        })
    }

    /// Creates stop criteria from thresholds already known to be numbers.
    pub(crate) fn from_validated(height_drop: Length, max_time: Time) -> Self {
        Self {
            height_drop,
            max_time,
        }
    }

    /// Returns the cumulative height drop that ends a run.
    #[must_use]
    pub fn height_drop(&self) -> Length {
        self.height_drop
    }

    /// Returns the simulated-time cap.
    #[must_use]
    pub fn max_time(&self) -> Time {
        self.max_time
    }

    /// Returns a copy with a different height-drop target.
    ///
    /// # Errors
    ///
    /// Returns an error if `height_drop` is NaN.
    pub fn with_height_drop(self, height_drop: Length) -> Result<Self, TerminationError> {
        Self::new(height_drop, self.max_time)
    }

    /// Returns a copy with a different simulated-time cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_time` is NaN.
    pub fn with_max_time(self, max_time: Time) -> Result<Self, TerminationError> {
        Self::new(self.height_drop, max_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{length::meter, time::second};

    #[test]
    fn accepts_zero_and_negative_thresholds() {
        assert!(Termination::new(Length::new::<meter>(0.0), Time::new::<second>(-1.0)).is_ok());
    }

    #[test]
    fn rejects_nan_thresholds() {
        assert_eq!(
            Termination::new(Length::new::<meter>(f64::NAN), Time::new::<second>(1.0)),
            Err(TerminationError::HeightDrop)
        );
        assert_eq!(
            Termination::new(Length::new::<meter>(0.1), Time::new::<second>(f64::NAN)),
            Err(TerminationError::MaxTime)
        );
    }

    #[test]
    fn builders_replace_one_threshold() {
        let base = Termination::new(Length::new::<meter>(0.08), Time::new::<second>(500.0))
            .unwrap();

        let shorter = base.with_max_time(Time::new::<second>(1.0)).unwrap();

        assert_eq!(shorter.height_drop(), base.height_drop());
        assert_eq!(shorter.max_time().get::<second>(), 1.0);

        let flat = base.with_height_drop(Length::new::<meter>(0.0)).unwrap();

        assert_eq!(flat.max_time(), base.max_time());
        assert_eq!(flat.height_drop().get::<meter>(), 0.0);
        assert_eq!(
            base.with_height_drop(Length::new::<meter>(f64::NAN)),
            Err(TerminationError::HeightDrop)
        );
    }
}
