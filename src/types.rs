//! Core types for the random-search crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Goal {
    /// Seek the lowest objective value.
    Minimize,
    /// Seek the highest objective value.
    Maximize,
}

impl Goal {
    /// The initial "worse than anything" value a search starts from:
    /// `+inf` for [`Minimize`](Goal::Minimize), `-inf` for
    /// [`Maximize`](Goal::Maximize).
    #[must_use]
    pub fn sentinel(self) -> f64 {
        match self {
            Goal::Minimize => f64::INFINITY,
            Goal::Maximize => f64::NEG_INFINITY,
        }
    }

    /// Returns `true` if `value` is strictly better than `incumbent` under
    /// this goal.
    ///
    /// The comparison is strict, so a tie never improves — the first
    /// candidate to reach a value wins. A NaN objective value never improves
    /// either, regardless of direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_search::Goal;
    ///
    /// assert!(Goal::Minimize.improves(1.0, 2.0));
    /// assert!(!Goal::Minimize.improves(2.0, 2.0));
    /// assert!(Goal::Maximize.improves(2.0, 1.0));
    /// ```
    #[must_use]
    pub fn improves(self, value: f64, incumbent: f64) -> bool {
        match self {
            Goal::Minimize => value < incumbent,
            Goal::Maximize => value > incumbent,
        }
    }
}
