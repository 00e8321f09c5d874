//! Dew-point temperature from vapor pressure.
//!
//! Two routes are provided:
//!
//! - [`dew_point`]: the piecewise log-quadratic fit, cheap and closed-form.
//! - [`dew_point_from_saturation`]: Newton inversion of the saturation
//!   pressure model, consistent with [`saturation_pressure`] to within the
//!   solver tolerance.

use tracing::trace;

use super::{
    PsychroError, SolverConfig,
    saturation::{
        MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, saturation_pressure,
        saturation_pressure_log_derivative,
    },
};

/// Lower (exclusive) dry-bulb bound of the dew-point fit, in °C.
pub const FIT_MIN_TEMPERATURE_C: f64 = -60.0;

/// Upper (exclusive) dry-bulb bound of the dew-point fit, in °C.
pub const FIT_MAX_TEMPERATURE_C: f64 = 70.0;

/// Returns the dew-point temperature in °C from the piecewise fit.
///
/// The branch is chosen by the dry-bulb temperature `t_c`:
///
/// - `-60 < T ≤ 0`: `Tdp = -60.450 + 7.0322·α + 0.3700·α²`
/// - `0 < T < 70`: `Tdp = -35.957 - 1.8726·α + 1.1689·α²`
///
/// where `α = ln(Pv)` with `Pv` in pascal.
///
/// # Errors
///
/// - [`PsychroError::OutOfDomain`] if `t_c` is outside `(-60, 70)` °C.
/// - [`PsychroError::InvalidRange`] if the vapor pressure is not strictly positive.
pub fn dew_point(t_c: f64, vapor_pressure_kpa: f64) -> Result<f64, PsychroError> {
    let in_fit = t_c > FIT_MIN_TEMPERATURE_C && t_c < FIT_MAX_TEMPERATURE_C;
    if !in_fit {
        return Err(PsychroError::out_of_domain(format!(
            "dew-point fit requires {FIT_MIN_TEMPERATURE_C} °C < T < {FIT_MAX_TEMPERATURE_C} °C, got {t_c} °C"
        )));
    }
    let alpha = ln_vapor_pressure_pa(vapor_pressure_kpa)?;

    let tdp = if t_c <= 0.0 {
        -60.450 + 7.0322 * alpha + 0.3700 * alpha * alpha
    } else {
        -35.957 - 1.8726 * alpha + 1.1689 * alpha * alpha
    };
    Ok(tdp)
}

/// Returns the dew point in °C by inverting the saturation pressure model.
///
/// Newton iteration on `ln Pvs(T) = ln Pv` starts at the dry-bulb temperature
/// and keeps every iterate inside the saturation model's domain.
/// The result never exceeds `dry_bulb_c`.
///
/// # Errors
///
/// - [`PsychroError::InvalidRange`] if the vapor pressure is not strictly positive.
/// - [`PsychroError::OutOfDomain`] if the vapor pressure lies outside the
///   saturation pressures at -100 °C and 200 °C.
/// - [`PsychroError::ConvergenceFailure`] if the step does not fall below
///   `config.temp_tol` within `config.max_iters` iterations.
pub fn dew_point_from_saturation(
    vapor_pressure_kpa: f64,
    dry_bulb_c: f64,
    config: &SolverConfig,
) -> Result<f64, PsychroError> {
    let ln_pv = ln_vapor_pressure_pa(vapor_pressure_kpa)?;

    let lowest = saturation_pressure(MIN_TEMPERATURE_C)?;
    let highest = saturation_pressure(MAX_TEMPERATURE_C)?;
    if vapor_pressure_kpa < lowest || vapor_pressure_kpa > highest {
        return Err(PsychroError::out_of_domain(format!(
            "vapor pressure {vapor_pressure_kpa} kPa is outside [{lowest}, {highest}] kPa"
        )));
    }

    let clamp = |t: f64| t.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C);
    let tol = config.tolerance();

    let mut t = clamp(dry_bulb_c);
    for iter in 1..=config.max_iters {
        let previous = t;
        let ln_pvs = (saturation_pressure(previous)? * 1000.0).ln();
        let slope = saturation_pressure_log_derivative(previous)?;

        t = clamp(previous - (ln_pvs - ln_pv) / slope);

        if (t - previous).abs() <= tol {
            trace!(iter, dew_point = t, "dew-point inversion converged");
            return Ok(t.min(dry_bulb_c));
        }
    }

    Err(PsychroError::ConvergenceFailure {
        iters: config.max_iters,
        lower: t.min(dry_bulb_c),
        upper: dry_bulb_c,
    })
}

fn ln_vapor_pressure_pa(vapor_pressure_kpa: f64) -> Result<f64, PsychroError> {
    if vapor_pressure_kpa.is_nan() || vapor_pressure_kpa <= 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "vapor pressure must be positive, got {vapor_pressure_kpa} kPa"
        )));
    }
    Ok((vapor_pressure_kpa * 1000.0).ln())
}
