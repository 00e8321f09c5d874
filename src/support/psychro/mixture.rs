//! Specific volume and enthalpy of moist air.

use super::PsychroError;

/// Specific gas constant of dry air, J/(kg·K).
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.055;

/// Returns the specific volume of moist air in m³ per kg of dry air.
///
/// Uses `v = (Ra·T/P)·(1 + 1.6078·W)/(1 + W)` with `T` in kelvin and `P` in Pa.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if the pressure is not strictly positive.
pub fn specific_volume(
    t_c: f64,
    humidity_ratio: f64,
    pressure_kpa: f64,
) -> Result<f64, PsychroError> {
    if pressure_kpa.is_nan() || pressure_kpa <= 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "pressure must be positive, got {pressure_kpa} kPa"
        )));
    }
    let dry_air = DRY_AIR_GAS_CONSTANT * (t_c + 273.15) / (pressure_kpa * 1000.0);
    Ok(dry_air * (1.0 + 1.6078 * humidity_ratio) / (1.0 + humidity_ratio))
}

/// Returns the enthalpy of moist air in kJ per kg of dry air.
///
/// `h = 1.006·T + W·(2501 + 1.805·T)`, referenced to dry air and liquid water at 0 °C.
#[must_use]
pub fn enthalpy(t_c: f64, humidity_ratio: f64) -> f64 {
    1.006 * t_c + humidity_ratio * (2501.0 + 1.805 * t_c)
}

/// Returns the humidity ratio that gives enthalpy `h` (kJ/kg) at `t_c`.
///
/// Inverse of [`enthalpy`] in the humidity ratio; this is the relation a chart
/// renderer sweeps to draw lines of constant enthalpy.
#[must_use]
pub fn humidity_ratio_from_enthalpy(t_c: f64, enthalpy_kj_per_kg: f64) -> f64 {
    (enthalpy_kj_per_kg - 1.006 * t_c) / (2501.0 + 1.805 * t_c)
}
