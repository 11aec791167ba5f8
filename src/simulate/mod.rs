//! Daily excess-return path generators.
//!
//! A closed family of return models behind one interface: the downstream
//! engine (rolling volatility, weighting, statistics) only sees the
//! generated matrix, never the model that produced it.

pub mod garch;
pub mod normal;
pub mod rng;

pub use garch::GarchGenerator;
pub use normal::NormalGenerator;

use crate::core::matrix::PathMatrix;

/// A seeded generator of daily excess-return paths.
pub trait ReturnPathGenerator {
    /// Simulate the full `(npaths, ndays)` excess-return matrix.
    ///
    /// Deterministic: the same configuration (seed included) produces a
    /// bit-identical matrix regardless of rayon thread count.
    fn generate(&self) -> PathMatrix;
}
