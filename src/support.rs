//! Supporting utilities for psychrometric modeling.
//!
//! - [`psychro`]: Per-point correlations and the wet-bulb solver, in fixed units.
//! - [`atmosphere`]: Standard-atmosphere pressure and temperature from altitude.
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Extensions to [`uom`].

pub mod atmosphere;
pub mod constraint;
pub mod psychro;
pub mod units;
