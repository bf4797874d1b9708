//! Basin search demo — the "hello world" of the random-search crate.
//!
//! Minimizes the two bowl-shaped reference objectives over `[-5, 5)` in two
//! dimensions, the offset quadratic first and the sum-of-squares second, and
//! prints the best candidate and value for each.
//!
//! Run with: `cargo run --example basin_search`

use random_search::prelude::*;

fn main() -> Result<()> {
    let space = SearchSpace::new(-5.0, 5.0, 2)?;
    let search = RandomSearch::new();

    // f(x) = Σ 0.5·(xi − 2)² − 5, minimum −10 at (2, 2).
    let outcome = search.minimize(&space, DEFAULT_MAX_ITERATIONS, OffsetQuadratic::default())?;
    let (best, value) = outcome.best().expect("non-zero budget always yields a candidate");
    println!("offset quadratic: best solution found: {best:?}");
    println!("offset quadratic: value: {value:.6}");

    // f(x) = Σ xi², minimum 0 at the origin.
    let outcome = search.minimize(&space, DEFAULT_MAX_ITERATIONS, Sphere)?;
    let (best, value) = outcome.best().expect("non-zero budget always yields a candidate");
    println!("sphere: best solution found: {best:?}");
    println!("sphere: value: {value:.6}");

    Ok(())
}
