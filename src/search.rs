//! The random-search loop.

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::space::SearchSpace;
use crate::types::Goal;

/// The iteration budget used by callers that have no opinion of their own.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// The result of a finished search: the best candidate found and its value.
///
/// `best_candidate` is `None` only when the search ran with a zero iteration
/// budget; in that case `best_value` still holds the goal's sentinel
/// (`+inf` when minimizing, `-inf` when maximizing) and must be treated as
/// "no solution found".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOutcome {
    /// The best candidate found, or `None` if nothing was evaluated.
    pub best_candidate: Option<Vec<f64>>,
    /// The objective value of the best candidate, or the goal's sentinel.
    pub best_value: f64,
    /// The number of objective evaluations performed.
    pub evaluations: u64,
}

impl SearchOutcome {
    /// Returns the best candidate and its value, or `None` if the search
    /// evaluated nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_search::prelude::*;
    ///
    /// let space = SearchSpace::new(-5.0, 5.0, 2)?;
    /// let outcome = RandomSearch::with_seed(42).minimize(&space, 0, Sphere)?;
    /// assert!(outcome.best().is_none());
    /// # Ok::<(), random_search::Error>(())
    /// ```
    #[must_use]
    pub fn best(&self) -> Option<(&[f64], f64)> {
        self.best_candidate
            .as_deref()
            .map(|candidate| (candidate, self.best_value))
    }
}

/// A pure random-search optimizer.
///
/// Candidates are drawn uniformly at random from a [`SearchSpace`], the
/// objective is evaluated at each one, and the best value seen is kept. The
/// search ignores all history — every draw is independent — which makes it a
/// useful baseline and a surprisingly strong competitor in high-dimensional
/// or highly irregular domains.
///
/// Each `RandomSearch` owns its generator, so concurrent searches do not
/// contend on shared RNG state and a seeded instance is fully deterministic.
///
/// # Examples
///
/// ```
/// use random_search::RandomSearch;
///
/// // Create with a default RNG
/// let search = RandomSearch::new();
///
/// // Create with a fixed seed for reproducibility
/// let search = RandomSearch::with_seed(42);
/// ```
pub struct RandomSearch {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSearch {
    /// Creates a new search with a default random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new search with a fixed seed for reproducibility.
    ///
    /// Using the same seed produces the same sequence of candidates, and
    /// therefore (for a deterministic objective) an identical outcome.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Runs the search loop: exactly `max_iterations` draw-evaluate-compare
    /// steps against `objective`.
    ///
    /// The incumbent starts at the goal's sentinel value and is replaced only
    /// on strict improvement, so the accepted values form a strictly
    /// monotonic sequence and the first candidate to reach a value wins ties.
    /// There is no early termination: the loop always spends the whole
    /// budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] as soon as any evaluation fails,
    /// discarding the iterations that remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_search::prelude::*;
    ///
    /// let space = SearchSpace::new(-5.0, 5.0, 2)?;
    /// let search = RandomSearch::with_seed(42);
    ///
    /// let outcome = search.run(&space, Goal::Minimize, 1_000, Sphere)?;
    /// assert_eq!(outcome.evaluations, 1_000);
    /// assert!(space.contains(outcome.best_candidate.as_deref().unwrap()));
    /// # Ok::<(), random_search::Error>(())
    /// ```
    pub fn run(
        &self,
        space: &SearchSpace,
        goal: Goal,
        max_iterations: usize,
        objective: impl Objective,
    ) -> Result<SearchOutcome> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("search", max_iterations, ?goal).entered();

        let mut best_value = goal.sentinel();
        let mut best_candidate: Option<Vec<f64>> = None;
        let mut evaluations: u64 = 0;

        for _ in 0..max_iterations {
            let candidate = {
                let mut rng = self.rng.lock();
                space.sample(&mut rng)
            };

            let value = objective
                .evaluate(&candidate)
                .map_err(|e| Error::Objective(e.to_string()))?;
            evaluations += 1;

            if goal.improves(value, best_value) {
                trace_debug!(evaluations, value, "new best value found");
                best_value = value;
                best_candidate = Some(candidate);
            }
        }

        trace_info!(evaluations, best_value, "search finished");

        Ok(SearchOutcome {
            best_candidate,
            best_value,
            evaluations,
        })
    }

    /// Runs the search with [`Goal::Minimize`].
    ///
    /// This is a shorthand for `run(space, Goal::Minimize, max_iterations, objective)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] as soon as any evaluation fails.
    pub fn minimize(
        &self,
        space: &SearchSpace,
        max_iterations: usize,
        objective: impl Objective,
    ) -> Result<SearchOutcome> {
        self.run(space, Goal::Minimize, max_iterations, objective)
    }

    /// Runs the search with [`Goal::Maximize`].
    ///
    /// This is a shorthand for `run(space, Goal::Maximize, max_iterations, objective)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] as soon as any evaluation fails.
    pub fn maximize(
        &self,
        space: &SearchSpace,
        max_iterations: usize,
        objective: impl Objective,
    ) -> Result<SearchOutcome> {
        self.run(space, Goal::Maximize, max_iterations, objective)
    }
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new()
    }
}
