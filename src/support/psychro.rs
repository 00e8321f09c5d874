//! Psychrometric correlations for moist air.
//!
//! This module provides the per-point formulas behind a psychrometric state:
//! closed-form ASHRAE Fundamentals (2001) Ch. 6 correlations and a bisection
//! solver for the wet-bulb temperature.
//!
//! # Units
//!
//! The correlations are empirical fits defined in fixed engineering units, so
//! this layer works in plain `f64` with unit-suffixed parameter names:
//!
//! | Quantity | Unit |
//! |---|---|
//! | temperature | °C |
//! | pressure | kPa |
//! | humidity ratio | kg water / kg dry air |
//! | enthalpy | kJ / kg dry air |
//! | specific volume | m³ / kg dry air |
//!
//! For a typed entry point that takes [`uom`] quantities and returns a full
//! state, see [`crate::models::psychrometrics`].
//!
//! # Provided relations
//!
//! - **Saturation**: [`saturation_pressure`], [`saturation_pressure_log_derivative`]
//! - **Humidity**: [`vapor_pressure`], [`saturation_humidity_ratio`], [`humidity_ratio`],
//!   [`vapor_pressure_from_humidity_ratio`], [`degree_of_saturation`]
//! - **Mixture**: [`specific_volume`], [`enthalpy`], [`humidity_ratio_from_enthalpy`]
//! - **Dew point**: [`dew_point`], [`dew_point_from_saturation`]
//! - **Wet bulb**: [`wet_bulb_temperature`], [`solve_wet_bulb_in`],
//!   [`humidity_ratio_from_wet_bulb`]
//!
//! # Example
//!
//! ```
//! use psychro_models::support::psychro::{
//!     PsychroError, SolverConfig, enthalpy, humidity_ratio, saturation_pressure,
//!     vapor_pressure, wet_bulb_temperature,
//! };
//!
//! fn main() -> Result<(), PsychroError> {
//!     let pvs = saturation_pressure(20.0)?;
//!     let w = humidity_ratio(101.325, vapor_pressure(0.5, pvs)?)?;
//!     let h = enthalpy(20.0, w);
//!
//!     let solution = wet_bulb_temperature(20.0, 0.5, 101.325, &SolverConfig::default())?;
//!     assert!(solution.dew_point_c < solution.wet_bulb_c);
//!     assert!(h > 38.0 && h < 39.0);
//!
//!     Ok(())
//! }
//! ```

mod config;
mod dew_point;
mod error;
mod humidity;
mod mixture;
mod saturation;
mod wet_bulb;

pub use config::SolverConfig;
pub use dew_point::{
    FIT_MAX_TEMPERATURE_C, FIT_MIN_TEMPERATURE_C, dew_point, dew_point_from_saturation,
};
pub use error::PsychroError;
pub use humidity::{
    MOLECULAR_WEIGHT_RATIO, degree_of_saturation, humidity_ratio, saturation_humidity_ratio,
    vapor_pressure, vapor_pressure_from_humidity_ratio,
};
pub use mixture::{DRY_AIR_GAS_CONSTANT, enthalpy, humidity_ratio_from_enthalpy, specific_volume};
pub use saturation::{
    MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, saturation_pressure, saturation_pressure_log_derivative,
};
pub use wet_bulb::{
    WetBulbSolution, humidity_ratio_from_wet_bulb, solve_wet_bulb_in, wet_bulb_temperature,
};
