#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is not strictly less than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a search space is created with zero dimensions.
    #[error("invalid dimensions: the search space must have at least one dimension")]
    InvalidDimensions,

    /// Returned when the objective function fails during evaluation.
    ///
    /// The search aborts on the first failed evaluation; there is no
    /// partial-result salvage.
    #[error("objective evaluation failed: {0}")]
    Objective(String),
}

pub type Result<T> = core::result::Result<T, Error>;
