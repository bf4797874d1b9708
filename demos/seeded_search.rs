//! Seeded search demo — reproducible results from a fixed seed.
//!
//! Runs the same seeded search twice and shows that the outcomes agree, then
//! runs a maximizing search to show the direction flip.
//!
//! Run with: `cargo run --example seeded_search`

use random_search::prelude::*;

fn main() -> Result<()> {
    let space = SearchSpace::new(-5.0, 5.0, 2)?;

    let first = RandomSearch::with_seed(42).minimize(&space, 1_000, Sphere)?;
    let second = RandomSearch::with_seed(42).minimize(&space, 1_000, Sphere)?;
    assert_eq!(first, second);
    println!("seed 42, both runs: f({:?}) = {:.6}", first.best_candidate, first.best_value);

    // The same objective, maximized: the best candidates drift toward the corners.
    let outcome = RandomSearch::with_seed(42).maximize(&space, 1_000, Sphere)?;
    println!("maximized: f({:?}) = {:.6}", outcome.best_candidate, outcome.best_value);

    Ok(())
}
