#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Pure random-search optimization of black-box objective functions.
//!
//! The algorithm is the simplest one there is: draw candidates uniformly at
//! random from a bounded hyper-rectangle, evaluate the objective at each one,
//! and keep the best value seen. No gradients, no adaptation, no convergence
//! checks — which also means no assumptions about the objective: it may be
//! non-convex, discontinuous, or noisy.
//!
//! # Getting Started
//!
//! Minimize a function in a few lines:
//!
//! ```
//! use random_search::prelude::*;
//!
//! let space = SearchSpace::new(-5.0, 5.0, 2)?;
//! let search = RandomSearch::with_seed(42);
//!
//! let outcome = search.minimize(&space, 1_000, |x: &[f64]| {
//!     Ok::<_, Error>(x.iter().map(|xi| xi * xi).sum())
//! })?;
//!
//! let (best, value) = outcome.best().unwrap();
//! println!("f({best:?}) = {value:.4}");
//! # Ok::<(), random_search::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`RandomSearch`] | Drive the sampling loop: draw candidates, evaluate, track the best. |
//! | [`SearchSpace`] | The bounded hyper-rectangle candidates are drawn from. |
//! | [`Objective`] | The function being optimized — a trait, with a blanket impl for closures. |
//! | [`Goal`] | Whether the search seeks the minimum or the maximum. |
//! | [`SearchOutcome`] | The best candidate found and its objective value. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key search points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod functions;
pub mod objective;
mod rng_util;
mod search;
mod space;
mod types;

pub use error::{Error, Result};
pub use objective::Objective;
pub use search::{RandomSearch, SearchOutcome, DEFAULT_MAX_ITERATIONS};
pub use space::SearchSpace;
pub use types::Goal;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use random_search::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::functions::{OffsetQuadratic, Sphere};
    pub use crate::objective::Objective;
    pub use crate::search::{RandomSearch, SearchOutcome, DEFAULT_MAX_ITERATIONS};
    pub use crate::space::SearchSpace;
    pub use crate::types::Goal;
}
