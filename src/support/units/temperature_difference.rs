use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`], so [`minus`](Self::minus) does it through
/// kelvin.
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::{degree_celsius as delta_celsius, kelvin as delta_kelvin},
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin as abs_kelvin},
    };

    #[test]
    fn subtract_temperatures() {
        let t1 = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(310.0);

        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), 10.0);
        assert_relative_eq!(t1.minus(t2).get::<delta_celsius>(), -10.0);
    }

    #[test]
    fn wet_bulb_depression_in_celsius() {
        let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(13.78);
        assert_relative_eq!(
            dry_bulb.minus(wet_bulb).get::<delta_celsius>(),
            6.22,
            epsilon = 1e-9
        );

        // Equal temperatures in different scales have no depression.
        let saturated = ThermodynamicTemperature::new::<degree_fahrenheit>(68.0);
        assert_relative_eq!(
            dry_bulb.minus(saturated).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
