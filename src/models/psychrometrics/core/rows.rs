//! Delimited station records.
//!
//! Each data line holds a dry-bulb temperature in °C, a relative humidity,
//! and optionally a barometric pressure, after any number of leading columns
//! (such as a date stamp) that [`RowFormat::skip_columns`] passes over.

use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::{hectopascal, kilopascal},
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::PsychroError;

use super::PsychrometricInput;

/// How the relative humidity column is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HumidityScale {
    /// `0` to `100`.
    #[default]
    Percent,
    /// `0` to `1`.
    Fraction,
}

/// Unit of the optional pressure column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PressureUnit {
    #[default]
    Kilopascal,
    /// Common in meteorological station exports.
    Hectopascal,
}

/// Layout of a delimited station file.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFormat {
    /// Whether the first non-blank, non-comment line is a header.
    pub has_header: bool,

    /// Field separator.
    pub delimiter: char,

    /// Lines starting with this prefix (after trimming) are skipped.
    pub comment_prefix: Option<char>,

    /// Leading columns to ignore before the dry bulb.
    pub skip_columns: usize,

    /// Scale of the relative humidity column.
    pub humidity_scale: HumidityScale,

    /// Unit of the pressure column, when present.
    pub pressure_unit: PressureUnit,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: ',',
            comment_prefix: Some('#'),
            skip_columns: 0,
            humidity_scale: HumidityScale::default(),
            pressure_unit: PressureUnit::default(),
        }
    }
}

/// One parsed station record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationRow {
    /// One-based line number in the source text.
    pub line: usize,

    /// Dry-bulb temperature.
    pub dry_bulb: ThermodynamicTemperature,

    /// Relative humidity, not yet range-checked.
    pub relative_humidity: Ratio,

    /// Barometric pressure, if the record has one.
    pub pressure: Option<Pressure>,
}

impl StationRow {
    /// Builds a validated input, using `default_pressure` when the record has none.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidRange`] if the relative humidity or the
    /// pressure violates its bounds.
    pub fn to_input(
        &self,
        default_pressure: Pressure,
    ) -> Result<PsychrometricInput, PsychroError> {
        PsychrometricInput::new(
            self.dry_bulb,
            self.relative_humidity,
            self.pressure.unwrap_or(default_pressure),
        )
    }
}

/// Errors from reading a single station line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Parses delimited station text into one result per data line.
///
/// Blank lines and comment lines produce nothing. A malformed line produces an
/// error for that line only.
///
/// # Example
///
/// ```
/// use psychro_models::models::psychrometrics::{RowFormat, parse_rows};
///
/// let text = "date,tbs,rh,p\n2024-04-01,19.7,15,77.1\n2024-04-02,oops,20,77.0\n";
/// let format = RowFormat { skip_columns: 1, ..RowFormat::default() };
///
/// let rows = parse_rows(text, &format);
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].is_ok());
/// assert!(rows[1].is_err());
/// ```
#[must_use]
pub fn parse_rows(text: &str, format: &RowFormat) -> Vec<Result<StationRow, RowParseError>> {
    let mut header_pending = format.has_header;

    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            if format
                .comment_prefix
                .is_some_and(|prefix| trimmed.starts_with(prefix))
            {
                return None;
            }
            if header_pending {
                header_pending = false;
                return None;
            }
            Some(parse_line(index + 1, trimmed, format))
        })
        .collect()
}

fn parse_line(line: usize, text: &str, format: &RowFormat) -> Result<StationRow, RowParseError> {
    let fields: Vec<&str> = text
        .split(format.delimiter)
        .skip(format.skip_columns)
        .map(str::trim)
        .collect();

    let (dry_bulb, humidity, pressure) = match fields.as_slice() {
        [t, rh] => (t, rh, None),
        [t, rh, p] => (t, rh, Some(p)),
        _ => {
            return Err(RowParseError::FieldCount {
                line,
                expected: "2 or 3",
                found: fields.len(),
            });
        }
    };

    let dry_bulb =
        ThermodynamicTemperature::new::<degree_celsius>(number(line, "dry bulb", dry_bulb)?);

    let humidity = number(line, "relative humidity", humidity)?;
    let relative_humidity = match format.humidity_scale {
        HumidityScale::Percent => Ratio::new::<percent>(humidity),
        HumidityScale::Fraction => Ratio::new::<ratio>(humidity),
    };

    let pressure = pressure
        .map(|p| number(line, "pressure", p))
        .transpose()?
        .map(|p| match format.pressure_unit {
            PressureUnit::Kilopascal => Pressure::new::<kilopascal>(p),
            PressureUnit::Hectopascal => Pressure::new::<hectopascal>(p),
        });

    Ok(StationRow {
        line,
        dry_bulb,
        relative_humidity,
        pressure,
    })
}

fn number(line: usize, field: &'static str, value: &str) -> Result<f64, RowParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowParseError::InvalidNumber {
            line,
            field,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn celsius(row: &StationRow) -> f64 {
        row.dry_bulb.get::<degree_celsius>()
    }

    fn headerless() -> RowFormat {
        RowFormat {
            has_header: false,
            ..RowFormat::default()
        }
    }

    #[test]
    fn header_comments_and_blank_lines_are_skipped() {
        let text = "# station 07\n\ntbs,rh\n20.0,50\n\n-10,80\n# trailing\n";
        let rows = parse_rows(text, &RowFormat::default());

        assert_eq!(rows.len(), 2);
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.line, 4);
        assert_relative_eq!(celsius(first), 20.0, epsilon = 1e-9);
        assert_relative_eq!(first.relative_humidity.get::<ratio>(), 0.5);
        assert!(first.pressure.is_none());

        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.line, 6);
        assert_relative_eq!(celsius(second), -10.0, epsilon = 1e-9);
    }

    #[test]
    fn hectopascal_pressure_with_leading_date() {
        let format = RowFormat {
            skip_columns: 1,
            pressure_unit: PressureUnit::Hectopascal,
            ..RowFormat::default()
        };
        let rows = parse_rows("fecha,tbs,hr,p\n2021-04-01, 19.7, 15, 770.6\n", &format);

        let row = rows[0].as_ref().unwrap();
        assert_relative_eq!(
            row.pressure.unwrap().get::<kilopascal>(),
            77.06,
            epsilon = 1e-9
        );
        assert_relative_eq!(row.relative_humidity.get::<ratio>(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn fraction_scale_and_custom_delimiter() {
        let format = RowFormat {
            has_header: false,
            delimiter: ';',
            humidity_scale: HumidityScale::Fraction,
            ..RowFormat::default()
        };
        let rows = parse_rows("25;0.4;101.3", &format);

        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.line, 1);
        assert_relative_eq!(row.relative_humidity.get::<ratio>(), 0.4);
        assert_relative_eq!(
            row.pressure.unwrap().get::<kilopascal>(),
            101.3,
            epsilon = 1e-9
        );
    }

    #[test]
    fn malformed_lines_are_reported_individually() {
        let text = "tbs,rh\n20,50\n20\n20,wet\n20,50,101,7\n21,inf\n";
        let rows = parse_rows(text, &RowFormat::default());

        assert_eq!(rows.len(), 5);
        assert!(rows[0].is_ok());
        assert_eq!(
            rows[1],
            Err(RowParseError::FieldCount {
                line: 3,
                expected: "2 or 3",
                found: 1
            })
        );
        assert_eq!(
            rows[2],
            Err(RowParseError::InvalidNumber {
                line: 4,
                field: "relative humidity",
                value: "wet".to_owned()
            })
        );
        assert!(matches!(rows[3], Err(RowParseError::FieldCount { found: 4, .. })));
        assert!(matches!(rows[4], Err(RowParseError::InvalidNumber { line: 6, .. })));
    }

    #[test]
    fn out_of_range_humidity_fails_at_input() {
        let rows = parse_rows("20,120", &headerless());
        let row = rows[0].as_ref().unwrap();

        let sea_level = Pressure::new::<kilopascal>(101.325);
        assert!(matches!(
            row.to_input(sea_level),
            Err(PsychroError::InvalidRange { .. })
        ));
    }

    #[test]
    fn record_pressure_overrides_default() {
        let rows = parse_rows("20,50,84", &headerless());
        let input = rows[0]
            .as_ref()
            .unwrap()
            .to_input(Pressure::new::<kilopascal>(101.325))
            .unwrap();
        assert_relative_eq!(
            input.pressure.as_ref().get::<kilopascal>(),
            84.0,
            epsilon = 1e-9
        );
    }
}
