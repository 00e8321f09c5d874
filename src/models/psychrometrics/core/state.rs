use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, Ratio, SpecificVolume, TemperatureInterval, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::{percent, ratio},
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{SpecificEnthalpy, TemperatureDifference};

/// Derived properties of one moist-air sample.
///
/// Humidity ratios, specific volume, and enthalpy are per unit mass of dry air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsychrometricState {
    /// Dry-bulb temperature.
    pub dry_bulb: ThermodynamicTemperature,

    /// Relative humidity.
    pub relative_humidity: Ratio,

    /// Total pressure the state was evaluated at.
    pub pressure: Pressure,

    /// Saturation vapor pressure at the dry bulb.
    pub saturation_pressure: Pressure,

    /// Partial pressure of water vapor.
    pub vapor_pressure: Pressure,

    /// Humidity ratio of saturated air at the dry bulb.
    pub saturation_humidity_ratio: Ratio,

    /// Humidity ratio, floored at the solver's minimum.
    pub humidity_ratio: Ratio,

    /// Degree of saturation, `W/Ws`.
    pub degree_of_saturation: Ratio,

    /// Specific volume.
    pub specific_volume: SpecificVolume,

    /// Dew-point temperature, never above the dry bulb.
    pub dew_point: ThermodynamicTemperature,

    /// Specific enthalpy, referenced to dry air and liquid water at 0 °C.
    pub enthalpy: SpecificEnthalpy,

    /// Thermodynamic wet-bulb temperature.
    pub wet_bulb: ThermodynamicTemperature,
}

impl PsychrometricState {
    /// Returns the wet-bulb depression, `dry_bulb − wet_bulb`.
    ///
    /// Zero for saturated air and positive otherwise.
    #[must_use]
    pub fn wet_bulb_depression(&self) -> TemperatureInterval {
        self.dry_bulb.minus(self.wet_bulb)
    }
}

/// Renders a labelled property report, one property per line.
impl fmt::Display for PsychrometricState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Dry-bulb temperature", self.dry_bulb.get::<degree_celsius>(), 2, "°C"),
            ("Relative humidity", self.relative_humidity.get::<percent>(), 1, "%"),
            ("Pressure", self.pressure.get::<kilopascal>(), 3, "kPa"),
            ("Saturation pressure", self.saturation_pressure.get::<kilopascal>(), 4, "kPa"),
            ("Vapor pressure", self.vapor_pressure.get::<kilopascal>(), 4, "kPa"),
            (
                "Saturation humidity ratio",
                self.saturation_humidity_ratio.get::<ratio>(),
                6,
                "kg/kg",
            ),
            ("Humidity ratio", self.humidity_ratio.get::<ratio>(), 6, "kg/kg"),
            ("Degree of saturation", self.degree_of_saturation.get::<ratio>(), 4, ""),
            (
                "Specific volume",
                self.specific_volume.get::<cubic_meter_per_kilogram>(),
                4,
                "m³/kg",
            ),
            ("Dew point", self.dew_point.get::<degree_celsius>(), 2, "°C"),
            ("Wet-bulb temperature", self.wet_bulb.get::<degree_celsius>(), 2, "°C"),
            ("Enthalpy", self.enthalpy.get::<kilojoule_per_kilogram>(), 2, "kJ/kg"),
        ];

        for (label, value, precision, unit) in rows {
            writeln!(f, "{label:<27}{value:>12.precision$} {unit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::kelvin as delta_kelvin;

    fn sample() -> PsychrometricState {
        PsychrometricState {
            dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            relative_humidity: Ratio::new::<ratio>(0.5),
            pressure: Pressure::new::<kilopascal>(101.325),
            saturation_pressure: Pressure::new::<kilopascal>(2.3388),
            vapor_pressure: Pressure::new::<kilopascal>(1.1694),
            saturation_humidity_ratio: Ratio::new::<ratio>(0.014_696),
            humidity_ratio: Ratio::new::<ratio>(0.007_262),
            degree_of_saturation: Ratio::new::<ratio>(0.4942),
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.8341),
            dew_point: ThermodynamicTemperature::new::<degree_celsius>(9.15),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(38.55),
            wet_bulb: ThermodynamicTemperature::new::<degree_celsius>(13.78),
        }
    }

    #[test]
    fn depression_is_dry_minus_wet() {
        assert_relative_eq!(
            sample().wet_bulb_depression().get::<delta_kelvin>(),
            6.22,
            epsilon = 1e-9
        );
    }

    #[test]
    fn report_lists_every_property() {
        let report = sample().to_string();
        assert_eq!(report.lines().count(), 12);
        assert!(report.contains("Wet-bulb temperature"));
        assert!(report.contains("13.78 °C"));
        assert!(report.contains("50.0 %"));
        assert!(report.contains("0.007262 kg/kg"));
    }
}
