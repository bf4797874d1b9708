//! Bowl-shaped reference objectives for demonstrations and tests.
//!
//! Both functions are separable sums over the coordinates with a single known
//! optimum, which makes expected search results easy to reason about.

use core::convert::Infallible;

use crate::objective::Objective;

/// An offset quadratic bowl: `f(x) = Σ a·(xi − h)² + k`.
///
/// The minimum is `n·k`, reached when every coordinate equals `h`. The
/// default parameters (`a = 0.5`, `h = 2`, `k = −5`) give a 2-D minimum of
/// `−10` at `(2, 2)`.
///
/// # Examples
///
/// ```
/// use random_search::functions::OffsetQuadratic;
/// use random_search::Objective;
///
/// let bowl = OffsetQuadratic::default();
/// assert_eq!(bowl.evaluate(&[2.0, 2.0]).unwrap(), -10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetQuadratic {
    /// Coefficient of the quadratic term.
    pub a: f64,
    /// x-coordinate of the vertex.
    pub h: f64,
    /// y-coordinate of the vertex.
    pub k: f64,
}

impl OffsetQuadratic {
    /// Creates a bowl with the given curvature and vertex.
    #[must_use]
    pub fn new(a: f64, h: f64, k: f64) -> Self {
        Self { a, h, k }
    }
}

impl Default for OffsetQuadratic {
    fn default() -> Self {
        Self {
            a: 0.5,
            h: 2.0,
            k: -5.0,
        }
    }
}

impl Objective for OffsetQuadratic {
    type Error = Infallible;

    fn evaluate(&self, candidate: &[f64]) -> Result<f64, Infallible> {
        Ok(candidate
            .iter()
            .map(|xi| self.a * (xi - self.h).powi(2) + self.k)
            .sum())
    }
}

/// The sum-of-squares bowl: `f(x) = Σ xi²`.
///
/// The minimum is `0` at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sphere;

impl Objective for Sphere {
    type Error = Infallible;

    fn evaluate(&self, candidate: &[f64]) -> Result<f64, Infallible> {
        Ok(candidate.iter().map(|xi| xi * xi).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn sphere_at_optimum() {
        assert!(Sphere.evaluate(&[0.0, 0.0]).unwrap().abs() < TOL);
        assert!(Sphere.evaluate(&[0.0; 10]).unwrap().abs() < TOL);
    }

    #[test]
    fn sphere_away_from_optimum() {
        assert_eq!(Sphere.evaluate(&[3.0, 4.0]).unwrap(), 25.0);
    }

    #[test]
    fn offset_quadratic_at_vertex() {
        let bowl = OffsetQuadratic::default();
        assert!((bowl.evaluate(&[2.0, 2.0]).unwrap() + 10.0).abs() < TOL);
        assert!((bowl.evaluate(&[2.0; 5]).unwrap() + 25.0).abs() < TOL);
    }

    #[test]
    fn offset_quadratic_custom_parameters() {
        let bowl = OffsetQuadratic::new(2.0, -1.0, 3.0);
        // f(0) = 2·(0 − (−1))² + 3 = 5 per coordinate
        assert!((bowl.evaluate(&[0.0, 0.0]).unwrap() - 10.0).abs() < TOL);
    }

    #[test]
    fn offset_quadratic_grows_away_from_vertex() {
        let bowl = OffsetQuadratic::default();
        let at_vertex = bowl.evaluate(&[2.0, 2.0]).unwrap();
        let off_vertex = bowl.evaluate(&[0.0, 4.0]).unwrap();
        assert!(off_vertex > at_vertex);
    }
}
