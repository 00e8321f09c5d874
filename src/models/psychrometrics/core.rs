//! Pipeline from validated inputs to derived psychrometric states.

mod batch;
mod compute;
mod input;
mod rows;
mod state;

pub use batch::{BatchReport, RowFailure, compute_batch};
pub use compute::compute_state;
pub use input::PsychrometricInput;
pub use rows::{HumidityScale, PressureUnit, RowFormat, RowParseError, StationRow, parse_rows};
pub use state::PsychrometricState;
