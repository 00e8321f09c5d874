//! Psychrometric state of moist air.
//!
//! Turns a dry-bulb temperature, relative humidity, and pressure (or station
//! altitude) into a full [`PsychrometricState`], and applies that computation
//! row by row to station records.
//!
//! # Example
//!
//! ```
//! use psychro_models::models::psychrometrics::{PsychrometricInput, compute_state};
//! use psychro_models::support::psychro::{PsychroError, SolverConfig};
//! use uom::si::{
//!     f64::{Length, Ratio, ThermodynamicTemperature},
//!     length::meter,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> Result<(), PsychroError> {
//!     let input = PsychrometricInput::at_altitude(
//!         ThermodynamicTemperature::new::<degree_celsius>(19.7),
//!         Ratio::new::<percent>(15.0),
//!         Length::new::<meter>(2250.0),
//!     )?;
//!
//!     let state = compute_state(&input, &SolverConfig::default())?;
//!     assert!(state.dew_point <= state.wet_bulb);
//!     assert!(state.wet_bulb <= state.dry_bulb);
//!
//!     println!("{state}");
//!     Ok(())
//! }
//! ```

mod core;

pub use self::core::{
    BatchReport, HumidityScale, PressureUnit, PsychrometricInput, PsychrometricState,
    RowFailure, RowFormat, RowParseError, StationRow, compute_batch, compute_state, parse_rows,
};
