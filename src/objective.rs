//! The [`Objective`] trait defines what gets optimized.
//!
//! For simple cases, pass a closure directly to
//! [`RandomSearch::run`](crate::RandomSearch::run):
//!
//! ```
//! use random_search::prelude::*;
//!
//! let space = SearchSpace::new(-5.0, 5.0, 2)?;
//! let search = RandomSearch::with_seed(42);
//!
//! let outcome = search.minimize(&space, 100, |x: &[f64]| {
//!     Ok::<_, Error>(x.iter().map(|xi| xi * xi).sum())
//! })?;
//! assert!(outcome.best_value >= 0.0);
//! # Ok::<(), random_search::Error>(())
//! ```
//!
//! Objectives that carry configuration — curvature coefficients, dataset
//! handles, whatever the function needs — implement the trait on a struct
//! whose fields hold that configuration. See
//! [`OffsetQuadratic`](crate::functions::OffsetQuadratic) for an example.

/// A scalar-valued function over an n-dimensional real domain.
///
/// The search makes no assumptions about the function beyond its signature:
/// it may be non-convex, discontinuous, or noisy. Implementations that can
/// never fail use [`core::convert::Infallible`] as the error type.
///
/// A blanket impl covers plain closures of the shape
/// `Fn(&[f64]) -> Result<f64, E>`.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString + 'static;

    /// Evaluate the function at `candidate`.
    ///
    /// # Errors
    ///
    /// Any error whose type implements `ToString`. A failed evaluation aborts
    /// the search immediately — see
    /// [`Error::Objective`](crate::Error::Objective).
    fn evaluate(&self, candidate: &[f64]) -> Result<f64, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: ToString + 'static,
{
    type Error = E;

    fn evaluate(&self, candidate: &[f64]) -> Result<f64, E> {
        self(candidate)
    }
}
