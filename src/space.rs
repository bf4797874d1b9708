//! The bounded hyper-rectangle that candidates are drawn from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// An axis-aligned search domain: the same `[low, high)` interval applied to
/// every one of `dimensions` coordinates.
///
/// The invariants `low < high` and `dimensions >= 1` are enforced at
/// construction, so every `SearchSpace` value is valid by the time a search
/// sees it.
///
/// # Examples
///
/// ```
/// use random_search::SearchSpace;
///
/// let space = SearchSpace::new(-5.0, 5.0, 2).unwrap();
/// assert_eq!(space.dimensions(), 2);
///
/// // Degenerate bounds are rejected up front.
/// assert!(SearchSpace::new(1.0, 1.0, 2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSpace {
    low: f64,
    high: f64,
    dimensions: usize,
}

impl SearchSpace {
    /// Creates a search space over `[low, high)` in each of `dimensions`
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] unless `low < high`, and
    /// [`Error::InvalidDimensions`] when `dimensions` is zero.
    pub fn new(low: f64, high: f64, dimensions: usize) -> Result<Self> {
        if low.is_nan() || high.is_nan() || low >= high {
            return Err(Error::InvalidBounds { low, high });
        }
        if dimensions == 0 {
            return Err(Error::InvalidDimensions);
        }
        Ok(Self {
            low,
            high,
            dimensions,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the number of coordinates in a candidate.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns `true` if `candidate` has the right length and every
    /// coordinate lies within `[low, high)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_search::SearchSpace;
    ///
    /// let space = SearchSpace::new(0.0, 1.0, 2).unwrap();
    /// assert!(space.contains(&[0.0, 0.5]));
    /// assert!(!space.contains(&[0.0, 1.0])); // upper bound is exclusive
    /// assert!(!space.contains(&[0.5]));
    /// ```
    #[must_use]
    pub fn contains(&self, candidate: &[f64]) -> bool {
        candidate.len() == self.dimensions
            && candidate.iter().all(|&x| self.low <= x && x < self.high)
    }

    /// Draws a fresh candidate, each coordinate independently uniform in
    /// `[low, high)`.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f64> {
        (0..self.dimensions)
            .map(|_| rng_util::f64_range(rng, self.low, self.high))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_degenerate_bounds() {
        assert!(matches!(
            SearchSpace::new(1.0, 1.0, 2),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(matches!(
            SearchSpace::new(2.0, -2.0, 2),
            Err(Error::InvalidBounds { .. })
        ));
    }

    #[test]
    fn rejects_nan_bounds() {
        assert!(matches!(
            SearchSpace::new(f64::NAN, 1.0, 2),
            Err(Error::InvalidBounds { .. })
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            SearchSpace::new(0.0, 1.0, 0),
            Err(Error::InvalidDimensions)
        ));
    }

    #[test]
    fn samples_stay_inside_the_half_open_interval() {
        let space = SearchSpace::new(-5.0, 5.0, 3).unwrap();
        let mut rng = fastrand::Rng::with_seed(42);

        for _ in 0..100 {
            let candidate = space.sample(&mut rng);
            assert_eq!(candidate.len(), 3);
            assert!(space.contains(&candidate));
        }
    }

    #[test]
    fn sampling_is_reproducible_for_a_fixed_seed() {
        let space = SearchSpace::new(0.0, 1.0, 4).unwrap();
        let mut rng1 = fastrand::Rng::with_seed(7);
        let mut rng2 = fastrand::Rng::with_seed(7);

        for _ in 0..10 {
            assert_eq!(space.sample(&mut rng1), space.sample(&mut rng2));
        }
    }
}
