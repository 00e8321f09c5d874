//! Saturation vapor pressure of water over ice and over liquid water.
//!
//! Both branches use the ASHRAE Fundamentals (2001) Ch. 6 fit
//! `ln(Pvs) = A1/T + A2 + A3·T + A4·T² + A5·T³ + A6·T⁴ + A7·ln(T)`
//! with `T` in kelvin and `Pvs` in pascal.

use super::PsychroError;

/// Lowest dry-bulb temperature covered by the fit, in °C.
pub const MIN_TEMPERATURE_C: f64 = -100.0;

/// Highest dry-bulb temperature covered by the fit, in °C.
pub const MAX_TEMPERATURE_C: f64 = 200.0;

const CELSIUS_OFFSET: f64 = 273.15;

struct Coefficients([f64; 7]);

/// Saturation over ice, `-100 °C ≤ T ≤ 0 °C`.
const OVER_ICE: Coefficients = Coefficients([
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
]);

/// Saturation over liquid water, `0 °C < T ≤ 200 °C`.
const OVER_WATER: Coefficients = Coefficients([
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    0.0,
    6.545_967_3,
]);

impl Coefficients {
    fn select(t_c: f64) -> Result<&'static Self, PsychroError> {
        if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&t_c) {
            return Err(PsychroError::out_of_domain(format!(
                "saturation pressure requires {MIN_TEMPERATURE_C} °C ≤ T ≤ {MAX_TEMPERATURE_C} °C, got {t_c} °C"
            )));
        }
        Ok(if t_c <= 0.0 { &OVER_ICE } else { &OVER_WATER })
    }

    /// Natural log of the saturation pressure in pascal.
    fn ln_pressure(&self, t_k: f64) -> f64 {
        let [a1, a2, a3, a4, a5, a6, a7] = self.0;
        a1 / t_k + a2 + t_k * (a3 + t_k * (a4 + t_k * (a5 + t_k * a6))) + a7 * t_k.ln()
    }

    /// Derivative of [`Self::ln_pressure`] with respect to temperature, in 1/K.
    fn ln_pressure_slope(&self, t_k: f64) -> f64 {
        let [a1, _, a3, a4, a5, a6, a7] = self.0;
        -a1 / (t_k * t_k) + a3 + t_k * (2.0 * a4 + t_k * (3.0 * a5 + t_k * 4.0 * a6)) + a7 / t_k
    }
}

/// Returns the saturation vapor pressure in kPa at a temperature in °C.
///
/// The coefficient set is chosen by the sign of the temperature:
/// over ice at or below 0 °C, over liquid water above it.
///
/// # Errors
///
/// Returns [`PsychroError::OutOfDomain`] if the temperature lies outside
/// `[-100, 200]` °C or is not a number.
///
/// # Example
///
/// ```
/// use psychro_models::support::psychro::saturation_pressure;
///
/// let pvs = saturation_pressure(20.0).unwrap();
/// assert!((pvs - 2.339).abs() < 1e-3);
/// ```
pub fn saturation_pressure(t_c: f64) -> Result<f64, PsychroError> {
    let coefficients = Coefficients::select(t_c)?;
    let pvs_pa = coefficients.ln_pressure(t_c + CELSIUS_OFFSET).exp();
    Ok(pvs_pa / 1000.0)
}

/// Returns `d ln(Pvs) / dT` in 1/K at a temperature in °C.
///
/// The logarithmic slope does not depend on the pressure unit.
///
/// # Errors
///
/// Returns [`PsychroError::OutOfDomain`] under the same conditions as
/// [`saturation_pressure`].
pub fn saturation_pressure_log_derivative(t_c: f64) -> Result<f64, PsychroError> {
    let coefficients = Coefficients::select(t_c)?;
    Ok(coefficients.ln_pressure_slope(t_c + CELSIUS_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_ashrae_table_values() {
        assert_relative_eq!(saturation_pressure(20.0).unwrap(), 2.3389, epsilon = 1e-3);
        assert_relative_eq!(saturation_pressure(-10.0).unwrap(), 0.25989, epsilon = 1e-4);
        assert_relative_eq!(saturation_pressure(100.0).unwrap(), 101.42, epsilon = 0.05);
    }

    #[test]
    fn both_branches_report_kilopascal() {
        // Ice and water fits agree near the triple point.
        let below = saturation_pressure(0.0).unwrap();
        let above = saturation_pressure(1e-6).unwrap();
        assert_relative_eq!(below, 0.6112, epsilon = 1e-3);
        assert_relative_eq!(above, below, max_relative = 1e-3);
    }

    #[test]
    fn domain_edges_are_inclusive() {
        assert!(saturation_pressure(MIN_TEMPERATURE_C).is_ok());
        assert!(saturation_pressure(MAX_TEMPERATURE_C).is_ok());
    }

    #[test]
    fn outside_domain_fails() {
        for t in [-100.5, 200.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                saturation_pressure(t),
                Err(PsychroError::OutOfDomain { .. })
            ));
            assert!(matches!(
                saturation_pressure_log_derivative(t),
                Err(PsychroError::OutOfDomain { .. })
            ));
        }
    }

    #[test]
    fn log_derivative_matches_finite_difference() {
        let h = 1e-4;
        for t in [-40.0, -5.0, 15.0, 60.0] {
            let ln_hi = saturation_pressure(t + h).unwrap().ln();
            let ln_lo = saturation_pressure(t - h).unwrap().ln();
            let numeric = (ln_hi - ln_lo) / (2.0 * h);
            assert_relative_eq!(
                saturation_pressure_log_derivative(t).unwrap(),
                numeric,
                max_relative = 1e-6
            );
        }
    }
}
