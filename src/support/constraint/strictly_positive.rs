use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Works with any `T: PartialOrd + Zero`, which includes `f64` and the
/// [`uom`] quantities used for pressure.
///
/// # Examples
///
/// ```
/// use psychro_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::kilopascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<kilopascal>(77.0)).unwrap();
/// assert_eq!(p.as_ref().get::<kilopascal>(), 77.0);
///
/// assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::Pressure,
        pressure::{hectopascal, kilopascal},
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn pressures() {
        let p = StrictlyPositive::new(Pressure::new::<hectopascal>(1013.25)).unwrap();
        approx::assert_relative_eq!(p.into_inner().get::<kilopascal>(), 101.325);

        assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(0.0)).is_err());
        assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(-1.0)).is_err());
    }
}
