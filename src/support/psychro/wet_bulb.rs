//! Wet-bulb temperature by bisection.
//!
//! The psychrometric energy balance gives the humidity ratio implied by a
//! dry-bulb/wet-bulb pair ([`humidity_ratio_from_wet_bulb`]). That relation
//! increases with the wet-bulb temperature, so the wet bulb matching a target
//! humidity ratio is found by bisecting on the sign of `W' − W` inside the
//! physical bracket `[dew point, dry bulb]`.

mod problem;

use tracing::debug;
use twine_solvers::equation::bisection;

use super::{
    PsychroError, SolverConfig, dew_point, dew_point_from_saturation, humidity_ratio,
    saturation_humidity_ratio, saturation_pressure, vapor_pressure,
    vapor_pressure_from_humidity_ratio,
};

use problem::{WetBulbModel, WetBulbProblem};

/// Relative mismatch below which the upper end is taken as the root.
const SATURATION_SLACK: f64 = 1e-9;

/// Result of a converged wet-bulb solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbSolution {
    /// Wet-bulb temperature, °C.
    pub wet_bulb_c: f64,

    /// Lower end of the starting bracket, °C.
    ///
    /// This is the fitted dew point capped at the dry bulb, or the exact
    /// inversion when the fit lands above the wet bulb.
    pub dew_point_c: f64,

    /// Target humidity ratio after flooring, kg/kg.
    pub humidity_ratio: f64,

    /// Bisection iterations performed.
    pub iters: usize,
}

/// Returns the humidity ratio implied by a dry-bulb/wet-bulb pair.
///
/// With `Ws` the saturation humidity ratio at the wet-bulb temperature:
///
/// - `Twb ≥ 0`: `W = ((2501 − 2.326·Twb)·Ws − 1.006·(Tbs − Twb)) / (2501 + 1.86·Tbs − 4.186·Twb)`
/// - `Twb < 0`: `W = ((2830 − 0.24·Twb)·Ws − 1.006·(Tbs − Twb)) / (2830 + 1.86·Tbs − 2.1·Twb)`
///
/// The result is floored at `min_humidity_ratio`.
///
/// # Errors
///
/// - [`PsychroError::InvalidRange`] if the wet bulb exceeds the dry bulb, or if
///   the pressure does not exceed the saturation pressure at the wet bulb.
/// - [`PsychroError::OutOfDomain`] if the wet bulb is outside the saturation
///   pressure model's domain.
pub fn humidity_ratio_from_wet_bulb(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
    min_humidity_ratio: f64,
) -> Result<f64, PsychroError> {
    if wet_bulb_c > dry_bulb_c {
        return Err(PsychroError::invalid_range(format!(
            "wet bulb {wet_bulb_c} °C cannot exceed dry bulb {dry_bulb_c} °C"
        )));
    }

    let w = energy_balance_humidity_ratio(dry_bulb_c, wet_bulb_c, pressure_kpa)?;
    Ok(w.max(min_humidity_ratio))
}

/// Unfloored energy balance shared by the public relation and the bisection model.
fn energy_balance_humidity_ratio(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
) -> Result<f64, PsychroError> {
    let ws = saturation_humidity_ratio(pressure_kpa, saturation_pressure(wet_bulb_c)?)?;
    let depression = dry_bulb_c - wet_bulb_c;

    let w = if wet_bulb_c >= 0.0 {
        ((2501.0 - 2.326 * wet_bulb_c) * ws - 1.006 * depression)
            / (2501.0 + 1.86 * dry_bulb_c - 4.186 * wet_bulb_c)
    } else {
        ((2830.0 - 0.24 * wet_bulb_c) * ws - 1.006 * depression)
            / (2830.0 + 1.86 * dry_bulb_c - 2.1 * wet_bulb_c)
    };
    Ok(w)
}

/// Solves for the wet-bulb temperature of moist air.
///
/// The target humidity ratio comes from the dry bulb, relative humidity, and
/// pressure. The bracket runs from the dew point (capped at the dry bulb) to
/// the dry bulb. When the target falls below the configured floor, as it does
/// for dry air, the dew point is taken at the vapor pressure implied by the
/// floor so its logarithm stays finite.
///
/// The dew-point fit can land above the wet bulb, close to saturation or at
/// vanishing vapor pressure. When the energy balance at the fitted dew point
/// already exceeds the target, the lower end drops to the exact inversion
/// from [`dew_point_from_saturation`].
///
/// # Errors
///
/// - [`PsychroError::InvalidRange`] for relative humidity outside `[0, 1]`, a
///   pressure at or below the vapor pressure, or a negative humidity ratio.
/// - [`PsychroError::OutOfDomain`] if the dry bulb is outside the saturation or
///   dew-point fits.
/// - [`PsychroError::ConvergenceFailure`] if no bracket around the root can be
///   formed, or if bisection needs more than `config.max_iters` iterations.
///
/// # Example
///
/// ```
/// use psychro_models::support::psychro::{SolverConfig, wet_bulb_temperature};
///
/// let solution = wet_bulb_temperature(20.0, 0.5, 101.325, &SolverConfig::default()).unwrap();
/// assert!((solution.wet_bulb_c - 13.78).abs() < 0.01);
/// ```
pub fn wet_bulb_temperature(
    dry_bulb_c: f64,
    relative_humidity: f64,
    pressure_kpa: f64,
    config: &SolverConfig,
) -> Result<WetBulbSolution, PsychroError> {
    let pv = vapor_pressure(relative_humidity, saturation_pressure(dry_bulb_c)?)?;
    let w = humidity_ratio(pressure_kpa, pv)?;
    check_target(w)?;

    let floor = config.humidity_floor();
    let dew_point_pv = if w < floor {
        vapor_pressure_from_humidity_ratio(floor, pressure_kpa)?
    } else {
        pv
    };

    let mut lower = dew_point(dry_bulb_c, dew_point_pv)?.min(dry_bulb_c);
    if energy_balance_humidity_ratio(dry_bulb_c, lower, pressure_kpa)? > w.max(floor) {
        let exact = dew_point_from_saturation(dew_point_pv, dry_bulb_c, config)?;
        debug!(fit_c = lower, exact_c = exact, "dew-point fit overshoots the wet bulb");
        lower = lower.min(exact);
    }

    solve_wet_bulb_in(dry_bulb_c, w, pressure_kpa, [lower, dry_bulb_c], config)
}

/// Bisects for the wet bulb within an explicit `[lower, upper]` bracket.
///
/// The residual is the unfloored energy-balance humidity ratio minus the
/// floored target. It must be non-positive at `lower` and non-negative at
/// `upper`. An upper end that already matches the target is returned
/// without iterating. Otherwise the solve succeeds once the bracket is no
/// wider than `config.temp_tol`.
///
/// # Errors
///
/// - [`PsychroError::ConvergenceFailure`] if `lower > upper`, either end is not
///   finite, the residual does not change sign across the bracket, or the
///   bracket is still too wide after `config.max_iters` steps. The error
///   carries the bracket that was searched.
/// - [`PsychroError::InvalidRange`] if the target humidity ratio is negative,
///   or if `upper` lies above the dry bulb.
/// - Any error from evaluating the energy balance at either end.
pub fn solve_wet_bulb_in(
    dry_bulb_c: f64,
    target_humidity_ratio: f64,
    pressure_kpa: f64,
    [lower, upper]: [f64; 2],
    config: &SolverConfig,
) -> Result<WetBulbSolution, PsychroError> {
    let no_bracket = || PsychroError::ConvergenceFailure {
        iters: 0,
        lower,
        upper,
    };

    if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
        return Err(no_bracket());
    }
    check_target(target_humidity_ratio)?;
    if upper > dry_bulb_c {
        return Err(PsychroError::invalid_range(format!(
            "bracket end {upper} °C cannot exceed dry bulb {dry_bulb_c} °C"
        )));
    }

    let target = target_humidity_ratio.max(config.humidity_floor());
    let model = WetBulbModel::new(dry_bulb_c, pressure_kpa);
    let problem = WetBulbProblem::new(target);

    let upper_residual =
        problem.residual(energy_balance_humidity_ratio(dry_bulb_c, upper, pressure_kpa)?);
    if upper_residual.abs() <= SATURATION_SLACK * target {
        return Ok(WetBulbSolution {
            wet_bulb_c: upper,
            dew_point_c: lower,
            humidity_ratio: target,
            iters: 0,
        });
    }

    let lower_residual =
        problem.residual(energy_balance_humidity_ratio(dry_bulb_c, lower, pressure_kpa)?);
    if lower_residual > 0.0 || upper_residual < 0.0 {
        debug!(
            dry_bulb_c,
            lower,
            upper,
            lower_residual,
            upper_residual,
            "wet bulb is not bracketed"
        );
        return Err(no_bracket());
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Saturation pressure at or above the total pressure: the midpoint is too warm.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .map_err(|error| {
        debug!(%error, lower, upper, "wet-bulb bisection rejected its bracket");
        no_bracket()
    })?;

    if solution.status != bisection::Status::Converged {
        return Err(PsychroError::ConvergenceFailure {
            iters: solution.iters,
            lower,
            upper,
        });
    }

    let wet_bulb_c = solution.snapshot.output.wet_bulb_c;
    debug!(
        dry_bulb_c,
        wet_bulb_c,
        iters = solution.iters,
        residual = solution.residual,
        "wet-bulb bisection converged"
    );

    Ok(WetBulbSolution {
        wet_bulb_c,
        dew_point_c: lower,
        humidity_ratio: target,
        iters: solution.iters,
    })
}

fn check_target(humidity_ratio: f64) -> Result<(), PsychroError> {
    if humidity_ratio.is_nan() || humidity_ratio < 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "humidity ratio cannot be negative, got {humidity_ratio}"
        )));
    }
    Ok(())
}
