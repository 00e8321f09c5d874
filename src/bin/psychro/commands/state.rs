//! Single-sample report.

use anyhow::Result;
use clap::Args;
use psychro_models::models::psychrometrics::{PsychrometricInput, compute_state};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{PressureArgs, SolverArgs};

#[derive(Args)]
pub struct StateArgs {
    /// Dry-bulb temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub dry_bulb: f64,

    /// Relative humidity in percent
    #[arg(long)]
    pub rh: f64,

    #[command(flatten)]
    pub pressure: PressureArgs,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: &StateArgs) -> Result<()> {
    let input = PsychrometricInput::new(
        ThermodynamicTemperature::new::<degree_celsius>(args.dry_bulb),
        Ratio::new::<percent>(args.rh),
        args.pressure.resolve()?,
    )?;

    let state = compute_state(&input, &args.solver.config())?;

    print!("{state}");
    println!(
        "{:<27}{:>12.2} K",
        "Wet-bulb depression",
        state.wet_bulb_depression().get::<delta_kelvin>()
    );
    Ok(())
}
