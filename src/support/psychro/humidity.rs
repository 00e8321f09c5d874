//! Vapor pressure and humidity ratio relations for moist air.
//!
//! Pressures are in kPa and humidity ratios in kg of water per kg of dry air.

use super::PsychroError;

/// Ratio of the molecular weights of water vapor and dry air.
pub const MOLECULAR_WEIGHT_RATIO: f64 = 0.62198;

/// Returns the partial pressure of water vapor, `Pv = RH·Pvs`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if `relative_humidity` is outside
/// `[0, 1]` or is not a number.
pub fn vapor_pressure(
    relative_humidity: f64,
    saturation_pressure_kpa: f64,
) -> Result<f64, PsychroError> {
    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(PsychroError::invalid_range(format!(
            "relative humidity must lie in [0, 1], got {relative_humidity}"
        )));
    }
    Ok(relative_humidity * saturation_pressure_kpa)
}

/// Returns the humidity ratio of saturated air, `Ws = 0.62198·Pvs/(P − Pvs)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if the total pressure does not
/// exceed the saturation pressure.
pub fn saturation_humidity_ratio(
    pressure_kpa: f64,
    saturation_pressure_kpa: f64,
) -> Result<f64, PsychroError> {
    mixing_ratio(pressure_kpa, saturation_pressure_kpa)
}

/// Returns the humidity ratio, `W = 0.62198·Pv/(P − Pv)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if the total pressure does not
/// exceed the vapor pressure.
pub fn humidity_ratio(pressure_kpa: f64, vapor_pressure_kpa: f64) -> Result<f64, PsychroError> {
    mixing_ratio(pressure_kpa, vapor_pressure_kpa)
}

/// Returns the vapor pressure in kPa that produces humidity ratio `w`.
///
/// Inverse of [`humidity_ratio`] in the vapor pressure.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if `w` is negative or not a number.
pub fn vapor_pressure_from_humidity_ratio(
    humidity_ratio: f64,
    pressure_kpa: f64,
) -> Result<f64, PsychroError> {
    if humidity_ratio.is_nan() || humidity_ratio < 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "humidity ratio must be non-negative, got {humidity_ratio}"
        )));
    }
    Ok(humidity_ratio * pressure_kpa / (MOLECULAR_WEIGHT_RATIO + humidity_ratio))
}

/// Returns the degree of saturation, `μ = W/Ws`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRange`] if `Ws` is not strictly positive.
pub fn degree_of_saturation(
    humidity_ratio: f64,
    saturation_humidity_ratio: f64,
) -> Result<f64, PsychroError> {
    if saturation_humidity_ratio.is_nan() || saturation_humidity_ratio <= 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "saturation humidity ratio must be positive, got {saturation_humidity_ratio}"
        )));
    }
    Ok(humidity_ratio / saturation_humidity_ratio)
}

fn mixing_ratio(pressure_kpa: f64, partial_pressure_kpa: f64) -> Result<f64, PsychroError> {
    let dry_air_pressure = pressure_kpa - partial_pressure_kpa;
    if dry_air_pressure.is_nan() || dry_air_pressure <= 0.0 {
        return Err(PsychroError::invalid_range(format!(
            "total pressure {pressure_kpa} kPa must exceed vapor pressure {partial_pressure_kpa} kPa"
        )));
    }
    Ok(MOLECULAR_WEIGHT_RATIO * partial_pressure_kpa / dry_air_pressure)
}
