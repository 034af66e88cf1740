//! Type-level numeric constraints checked at construction time.
//!
//! A [`Constrained<T, C>`] value can only be built when `C::check` accepts
//! the wrapped value, so code holding one never has to re-validate it.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonNegative`]: Zero or greater
//!
//! Both work with primitive floats and with `uom` quantities, since each only
//! requires [`PartialOrd`] and [`Zero`].

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// Marker for values greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

/// Marker for values greater than or equal to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use tubedrain_core::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(0.25).unwrap();
/// assert_eq!(n.into_inner(), 0.25);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
