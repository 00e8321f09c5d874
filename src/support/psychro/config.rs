use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the iterative psychrometric solves.
///
/// Used by [`wet_bulb_temperature`](super::wet_bulb_temperature) and
/// [`dew_point_from_saturation`](super::dew_point_from_saturation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum iteration count.
    pub max_iters: usize,

    /// Absolute tolerance on the temperature being solved for.
    ///
    /// Bisection stops once its bracket is no wider than this.
    pub temp_tol: TemperatureInterval,

    /// Floor applied to humidity ratios so logarithms and divisions stay defined.
    pub min_humidity_ratio: Ratio,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-3),
            min_humidity_ratio: Ratio::new::<ratio>(1e-7),
        }
    }
}

impl SolverConfig {
    /// Temperature tolerance in K (equivalently °C).
    pub(crate) fn tolerance(&self) -> f64 {
        self.temp_tol.get::<delta_kelvin>()
    }

    /// Humidity ratio floor in kg/kg.
    pub(crate) fn humidity_floor(&self) -> f64 {
        self.min_humidity_ratio.get::<ratio>()
    }

    /// Converts this configuration into a bisection solver configuration.
    ///
    /// Only the bracket width ends the solve; the residual tolerance is zero.
    pub(crate) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.tolerance(),
            x_rel_tol: 0.0,
            residual_tol: 0.0,
        }
    }
}
