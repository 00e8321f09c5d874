//! Extensions to [`uom`].
//!
//! Psychrometric states are reported as [`uom`] quantities. This module adds
//! the pieces [`uom`] does not ship.
//!
//! ## Specific enthalpy
//!
//! [`SpecificEnthalpy`] names the J/kg dimension used for moist-air enthalpy,
//! which is reported per kilogram of dry air.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method that subtracts two absolute temperatures and returns an interval.
//! The wet-bulb depression is computed this way:
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use psychro_models::support::units::TemperatureDifference;
//!
//! let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(13.8);
//! let depression = dry_bulb.minus(wet_bulb);
//! assert!((depression.get::<delta_kelvin>() - 6.2).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
