//! Station-file processing.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use psychro_models::models::psychrometrics::{
    HumidityScale, PressureUnit, PsychrometricState, RowFormat, compute_batch, parse_rows,
};
use tracing::{info, warn};
use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::kilopascal, ratio::ratio,
    specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::degree_celsius,
};

use super::{PressureArgs, SolverArgs};

const CSV_HEADER: &str = "line,dry_bulb_c,relative_humidity,pressure_kpa,\
saturation_pressure_kpa,vapor_pressure_kpa,saturation_humidity_ratio,humidity_ratio,\
degree_of_saturation,specific_volume_m3_per_kg,dew_point_c,enthalpy_kj_per_kg,wet_bulb_c";

#[derive(Args)]
pub struct BatchArgs {
    /// Delimited file of `dry_bulb, rh[, pressure]` records
    pub file: PathBuf,

    // Applies to records without a pressure column.
    #[command(flatten)]
    pub pressure: PressureArgs,

    /// Relative humidity column is a fraction (0-1) rather than percent
    #[arg(long)]
    pub rh_fraction: bool,

    /// Pressure column is in hPa rather than kPa
    #[arg(long)]
    pub pressure_hpa: bool,

    /// Leading columns to ignore, such as a date stamp
    #[arg(long, default_value_t = 0)]
    pub skip_columns: usize,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// The file has no header line
    #[arg(long)]
    pub no_header: bool,

    #[command(flatten)]
    pub solver: SolverArgs,
}

impl BatchArgs {
    fn row_format(&self) -> RowFormat {
        RowFormat {
            has_header: !self.no_header,
            delimiter: self.delimiter,
            skip_columns: self.skip_columns,
            humidity_scale: if self.rh_fraction {
                HumidityScale::Fraction
            } else {
                HumidityScale::Percent
            },
            pressure_unit: if self.pressure_hpa {
                PressureUnit::Hectopascal
            } else {
                PressureUnit::Kilopascal
            },
            ..RowFormat::default()
        }
    }
}

pub fn execute(args: &BatchArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let default_pressure = args.pressure.resolve()?;

    let mut lines = Vec::new();
    let mut inputs = Vec::new();
    let mut skipped = 0;

    for row in parse_rows(&text, &args.row_format()) {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                warn!(%error, "skipping malformed record");
                skipped += 1;
                continue;
            }
        };
        match row.to_input(default_pressure) {
            Ok(input) => {
                lines.push(row.line);
                inputs.push(input);
            }
            Err(error) => {
                warn!(line = row.line, %error, "skipping record");
                skipped += 1;
            }
        }
    }

    let report = compute_batch(inputs, &args.solver.config());

    println!("{CSV_HEADER}");
    for (index, state) in report.states() {
        println!("{}", csv_row(lines[index], state));
    }
    for failure in report.failures() {
        warn!(line = lines[failure.index], error = %failure.error, "record failed");
    }

    let failed = report.failures().count();
    info!(
        computed = report.len() - failed,
        skipped = skipped + failed,
        "batch complete"
    );
    Ok(())
}

fn csv_row(line: usize, state: &PsychrometricState) -> String {
    format!(
        "{line},{:.2},{:.4},{:.3},{:.5},{:.5},{:.7},{:.7},{:.5},{:.5},{:.3},{:.3},{:.3}",
        state.dry_bulb.get::<degree_celsius>(),
        state.relative_humidity.get::<ratio>(),
        state.pressure.get::<kilopascal>(),
        state.saturation_pressure.get::<kilopascal>(),
        state.vapor_pressure.get::<kilopascal>(),
        state.saturation_humidity_ratio.get::<ratio>(),
        state.humidity_ratio.get::<ratio>(),
        state.degree_of_saturation.get::<ratio>(),
        state.specific_volume.get::<cubic_meter_per_kilogram>(),
        state.dew_point.get::<degree_celsius>(),
        state.enthalpy.get::<kilojoule_per_kilogram>(),
        state.wet_bulb.get::<degree_celsius>(),
    )
}
