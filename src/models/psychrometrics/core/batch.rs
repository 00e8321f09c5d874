use tracing::warn;

use crate::support::psychro::{PsychroError, SolverConfig};

use super::{PsychrometricInput, PsychrometricState, compute_state};

/// A sample that could not be turned into a state.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// Zero-based position of the sample in the batch.
    pub index: usize,

    /// Why the computation failed.
    pub error: PsychroError,
}

/// Outcome of [`compute_batch`], one entry per input in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Each sample's state, or why it failed.
    pub outcomes: Vec<Result<PsychrometricState, RowFailure>>,
}

impl BatchReport {
    /// Iterates over the successfully computed states with their batch index.
    pub fn states(&self) -> impl Iterator<Item = (usize, &PsychrometricState)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.as_ref().ok().map(|state| (index, state)))
    }

    /// Iterates over the failed samples.
    pub fn failures(&self) -> impl Iterator<Item = &RowFailure> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    /// Number of samples in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` if the batch had no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Computes a state for every input, isolating failures per sample.
///
/// A sample that fails is logged at `warn` level and recorded as a
/// [`RowFailure`]; the remaining samples are still computed.
pub fn compute_batch<I>(inputs: I, config: &SolverConfig) -> BatchReport
where
    I: IntoIterator<Item = PsychrometricInput>,
{
    let outcomes = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            compute_state(&input, config).map_err(|error| {
                warn!(index, %error, "skipping sample");
                RowFailure { index, error }
            })
        })
        .collect();

    BatchReport { outcomes }
}
