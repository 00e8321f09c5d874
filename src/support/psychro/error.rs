use thiserror::Error;

/// Errors that may occur when evaluating psychrometric properties.
///
/// Every error is local to the call that produced it.
/// No function in this crate keeps state between calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// An input violates a documented constraint.
    ///
    /// For example, relative humidity outside `[0, 1]`, a wet-bulb temperature
    /// above the dry-bulb temperature, or a vapor pressure at or above the
    /// total pressure.
    #[error("invalid range: {context}")]
    InvalidRange { context: String },

    /// A temperature or altitude lies outside a correlation's fitted span.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// An iterative solve did not close its bracket within the iteration limit.
    ///
    /// Also returned when the solver is handed a bracket that cannot contain a
    /// root: a lower end above the upper end, a non-finite end, or no sign
    /// change across it.
    #[error("no convergence after {iters} iterations: bracket=[{lower}, {upper}]")]
    ConvergenceFailure {
        /// Iterations performed before giving up.
        iters: usize,

        /// Lower end of the searched interval, in °C.
        lower: f64,

        /// Upper end of the searched interval, in °C.
        upper: f64,
    },
}

impl PsychroError {
    pub(crate) fn invalid_range(context: impl Into<String>) -> Self {
        Self::InvalidRange {
            context: context.into(),
        }
    }

    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }
}
