use uom::si::f64::{Length, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::{
    atmosphere::AtmosphericState,
    constraint::{Constrained, Constraint, StrictlyPositive, UnitInterval},
    psychro::PsychroError,
};

/// Validated conditions of one moist-air sample.
///
/// Relative humidity is held in `[0, 1]` and pressure is strictly positive.
/// Both are checked at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsychrometricInput {
    /// Dry-bulb temperature.
    pub dry_bulb: ThermodynamicTemperature,

    /// Relative humidity as a fraction of saturation.
    pub relative_humidity: Constrained<Ratio, UnitInterval>,

    /// Total (barometric) pressure.
    pub pressure: Constrained<Pressure, StrictlyPositive>,
}

impl PsychrometricInput {
    /// Creates an input from a dry bulb, relative humidity, and total pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidRange`] if the relative humidity lies
    /// outside `[0, 1]` or the pressure is not strictly positive.
    pub fn new(
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Ratio,
        pressure: Pressure,
    ) -> Result<Self, PsychroError> {
        Ok(Self {
            dry_bulb,
            relative_humidity: constrain("relative humidity", relative_humidity)?,
            pressure: constrain("pressure", pressure)?,
        })
    }

    /// Creates an input at the standard-atmosphere pressure of a station altitude.
    ///
    /// # Errors
    ///
    /// - [`PsychroError::OutOfDomain`] if the altitude is outside the troposphere.
    /// - [`PsychroError::InvalidRange`] if the relative humidity lies outside `[0, 1]`.
    pub fn at_altitude(
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Ratio,
        altitude: Length,
    ) -> Result<Self, PsychroError> {
        let atmosphere = AtmosphericState::at_altitude(altitude)?;
        Self::new(dry_bulb, relative_humidity, atmosphere.pressure)
    }
}

fn constrain<T, C: Constraint<T>>(
    field: &str,
    value: T,
) -> Result<Constrained<T, C>, PsychroError> {
    Constrained::new(value)
        .map_err(|error| PsychroError::invalid_range(format!("{field}: {error}")))
}
