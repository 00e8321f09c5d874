//! Standard-atmosphere conditions at a station altitude.
//!
//! Station records usually carry an elevation rather than a barometric
//! reading. [`AtmosphericState::at_altitude`] converts one to the other using
//! the ASHRAE Fundamentals (2001) Ch. 6 troposphere relations:
//!
//! - `P = 101.325·(1 − 2.25577e-5·Z)^5.2559` kPa
//! - `T = 15 − 0.0065·Z` °C

use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::meter,
    pressure::kilopascal,
    thermodynamic_temperature::degree_celsius,
};

use super::psychro::PsychroError;

/// Lowest altitude accepted by [`AtmosphericState::at_altitude`], in meters.
pub const MIN_ALTITUDE_M: f64 = -5_000.0;

/// Highest altitude accepted by [`AtmosphericState::at_altitude`], in meters.
///
/// The lapse-rate relations only hold in the troposphere.
pub const MAX_ALTITUDE_M: f64 = 11_000.0;

const SEA_LEVEL_PRESSURE_KPA: f64 = 101.325;
const SEA_LEVEL_TEMPERATURE_C: f64 = 15.0;
const LAPSE_RATE_K_PER_M: f64 = 0.0065;

/// Pressure and temperature of the standard atmosphere at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl AtmosphericState {
    /// Standard sea-level conditions, 101.325 kPa and 15 °C.
    #[must_use]
    pub fn sea_level() -> Self {
        Self {
            pressure: Pressure::new::<kilopascal>(SEA_LEVEL_PRESSURE_KPA),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(SEA_LEVEL_TEMPERATURE_C),
        }
    }

    /// Returns standard-atmosphere conditions at `altitude`.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfDomain`] if the altitude lies outside
    /// [`MIN_ALTITUDE_M`]..=[`MAX_ALTITUDE_M`] or is not a number.
    ///
    /// # Example
    ///
    /// ```
    /// use psychro_models::support::atmosphere::AtmosphericState;
    /// use uom::si::{f64::Length, length::meter, pressure::kilopascal};
    ///
    /// let station = AtmosphericState::at_altitude(Length::new::<meter>(2250.0)).unwrap();
    /// assert!((station.pressure.get::<kilopascal>() - 77.06).abs() < 0.01);
    /// ```
    pub fn at_altitude(altitude: Length) -> Result<Self, PsychroError> {
        let z = altitude.get::<meter>();
        if !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&z) {
            return Err(PsychroError::out_of_domain(format!(
                "altitude must lie in [{MIN_ALTITUDE_M}, {MAX_ALTITUDE_M}] m, got {z} m"
            )));
        }

        let pressure_kpa = SEA_LEVEL_PRESSURE_KPA * (1.0 - 2.255_77e-5 * z).powf(5.2559);
        let temperature_c = SEA_LEVEL_TEMPERATURE_C - LAPSE_RATE_K_PER_M * z;

        Ok(Self {
            pressure: Pressure::new::<kilopascal>(pressure_kpa),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature_c),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn at(z: f64) -> AtmosphericState {
        AtmosphericState::at_altitude(Length::new::<meter>(z)).unwrap()
    }

    #[test]
    fn sea_level_is_standard() {
        let state = at(0.0);
        assert_relative_eq!(state.pressure.get::<kilopascal>(), 101.325, epsilon = 1e-9);
        assert_relative_eq!(
            state.temperature.get::<degree_celsius>(),
            15.0,
            epsilon = 1e-9
        );

        let standard = AtmosphericState::sea_level();
        assert_relative_eq!(
            standard.pressure.get::<kilopascal>(),
            state.pressure.get::<kilopascal>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn mountain_station() {
        let state = at(2250.0);
        assert_relative_eq!(state.pressure.get::<kilopascal>(), 77.058, epsilon = 1e-3);
        assert_relative_eq!(
            state.temperature.get::<degree_celsius>(),
            0.375,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pressure_falls_with_altitude() {
        let low = at(-400.0).pressure;
        let mid = at(1500.0).pressure;
        let high = at(MAX_ALTITUDE_M).pressure;
        assert!(low > at(0.0).pressure);
        assert!(mid < at(0.0).pressure);
        assert!(high < mid);
        assert!(high.get::<kilopascal>() > 0.0);
    }

    #[test]
    fn outside_troposphere_is_rejected() {
        for z in [-5_001.0, 11_001.0, f64::NAN] {
            assert!(matches!(
                AtmosphericState::at_altitude(Length::new::<meter>(z)),
                Err(PsychroError::OutOfDomain { .. })
            ));
        }
    }
}
