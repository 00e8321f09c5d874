//! Bisection problem for the wet-bulb solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use super::{PsychroError, energy_balance_humidity_ratio};

/// Humidity ratio implied by one candidate wet bulb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct WetBulbEvaluation {
    pub(super) wet_bulb_c: f64,

    /// Unfloored energy-balance humidity ratio, kg/kg.
    pub(super) humidity_ratio: f64,
}

/// Evaluates the psychrometric energy balance at a fixed dry bulb and pressure.
pub(super) struct WetBulbModel {
    dry_bulb_c: f64,
    pressure_kpa: f64,
}

impl WetBulbModel {
    pub(super) fn new(dry_bulb_c: f64, pressure_kpa: f64) -> Self {
        Self {
            dry_bulb_c,
            pressure_kpa,
        }
    }
}

impl Model for WetBulbModel {
    type Input = ThermodynamicTemperature;
    type Output = WetBulbEvaluation;
    type Error = PsychroError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let wet_bulb_c = input.get::<degree_celsius>();
        let humidity_ratio =
            energy_balance_humidity_ratio(self.dry_bulb_c, wet_bulb_c, self.pressure_kpa)?;
        Ok(WetBulbEvaluation {
            wet_bulb_c,
            humidity_ratio,
        })
    }
}

/// Residual `W' − W` against a floored target humidity ratio.
///
/// The bisection variable is the wet bulb in °C.
pub(super) struct WetBulbProblem {
    target_humidity_ratio: f64,
}

impl WetBulbProblem {
    pub(super) fn new(target_humidity_ratio: f64) -> Self {
        Self {
            target_humidity_ratio,
        }
    }

    pub(super) fn residual(&self, humidity_ratio: f64) -> f64 {
        humidity_ratio - self.target_humidity_ratio
    }
}

impl EquationProblem<1> for WetBulbProblem {
    type Input = ThermodynamicTemperature;
    type Output = WetBulbEvaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output.humidity_ratio)])
    }
}
