//! Subcommands and the options they share.

#[path = "commands/batch.rs"]
pub mod batch;
#[path = "commands/state.rs"]
pub mod state;

use anyhow::Result;
use clap::Args;
use psychro_models::support::{atmosphere::AtmosphericState, psychro::SolverConfig};
use uom::si::{
    f64::{Length, Pressure, TemperatureInterval},
    length::meter,
    pressure::kilopascal,
    temperature_interval::kelvin as delta_kelvin,
};

/// Where the total pressure comes from.
#[derive(Args)]
pub struct PressureArgs {
    /// Station altitude in meters (standard atmosphere)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "pressure")]
    pub altitude: Option<f64>,

    /// Barometric pressure in kPa
    #[arg(long)]
    pub pressure: Option<f64>,
}

impl PressureArgs {
    /// Resolves the pressure, defaulting to standard sea level.
    pub fn resolve(&self) -> Result<Pressure> {
        Ok(match (self.altitude, self.pressure) {
            (_, Some(p)) => Pressure::new::<kilopascal>(p),
            (Some(z), None) => AtmosphericState::at_altitude(Length::new::<meter>(z))?.pressure,
            (None, None) => AtmosphericState::sea_level().pressure,
        })
    }
}

/// Wet-bulb solver settings.
#[derive(Args)]
pub struct SolverArgs {
    /// Bracket width at which the wet-bulb solve stops, in K
    #[arg(long, default_value_t = 1e-3)]
    pub tolerance: f64,

    /// Iteration limit for the wet-bulb solve
    #[arg(long, default_value_t = 100)]
    pub max_iters: usize,
}

impl SolverArgs {
    pub fn config(&self) -> SolverConfig {
        SolverConfig {
            max_iters: self.max_iters,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(self.tolerance),
            ..SolverConfig::default()
        }
    }
}
