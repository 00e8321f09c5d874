//! # Psychro Models
//!
//! Psychrometric properties of moist air from field station readings.
//!
//! Given a dry-bulb temperature, a relative humidity, and a barometric
//! pressure (or station altitude), this crate derives the full psychrometric
//! state: saturation and vapor pressures, humidity ratios, degree of
//! saturation, specific volume, enthalpy, dew point, and the wet-bulb
//! temperature found by bisection.
//!
//! ## Crate layout
//!
//! - [`models`]: Typed entry points built on [`uom`] quantities.
//! - [`support`]: Supporting utilities used by models, including the
//!   fixed-unit correlations in [`support::psychro`].
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own (a chart renderer sweeps the per-point formulas directly), but
//! their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! moves to [`support`] once it is useful outside that model.

pub mod models;
pub mod support;
