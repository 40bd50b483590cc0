//! # Specht
//!
//! Hilbert series of Specht-type ideals, organized by the dominance order on
//! integer partitions.
//!
//! ## Layers
//!
//! - **Rings and polynomials**: exact bigint coefficients, dense polynomials
//!   in `t` with exact division by `1 - t`
//! - **Rational expressions**: canonical `h(t) / (1 - t)^a`
//! - **Partitions**: corners, dominance, meets, the dominance poset with its
//!   cover relations and ranks, order ideals
//! - **Series**: the memoized recursion for partitions and the
//!   inclusion-exclusion recursion for ideals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specht::prelude::*;
//!
//! let poset = build_poset(5);
//! let ideal = build_ideal(5, [Partition::new([3, 2])?])?;
//! let series = hilbert_series(&Partition::new([4, 2, 1])?)?;
//! println!("{poset}\n{ideal}\n{series}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use specht_expr as expr;
pub use specht_partitions as partitions;
pub use specht_poly as poly;
pub use specht_rings as rings;
pub use specht_series as series;

use specht_expr::HilbExpr;
use specht_partitions::{Ideal, Partition, PartitionError, Poset};
use specht_series::{HilbertSeriesEngine, SeriesConfig, SeriesError};


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{build_ideal, build_poset, hilbert_series, ideal_hilbert_series};
    pub use specht_expr::{ExprError, HilbExpr};
    pub use specht_partitions::{Ideal, Partition, PartitionError, Poset};
    pub use specht_poly::DensePoly;
    pub use specht_rings::{Ring, Z};
    pub use specht_series::{HilbertSeriesEngine, SeriesConfig, SeriesError};
}

/// All partitions of `n` with cover relations and ranks.
#[must_use]
pub fn build_poset(n: u32) -> Poset {
    Poset::build(n)
}

/// The order ideal of partitions of `n` generated by `generators`.
///
/// # Errors
///
/// Returns [`PartitionError::MismatchedSize`] if a generator does not sum
/// to `n`.
pub fn build_ideal<I>(n: u32, generators: I) -> Result<Ideal, PartitionError>
where
    I: IntoIterator<Item = Partition>,
{
    Ideal::with_generators(n, generators)
}

/// The Hilbert series of a partition, with a fresh memo table.
///
/// Use a [`HilbertSeriesEngine`] directly to share memoized results across
/// queries.
///
/// # Errors
///
/// Propagates [`SeriesError`] from the engine.
pub fn hilbert_series(p: &Partition) -> Result<HilbExpr, SeriesError> {
    HilbertSeriesEngine::new(SeriesConfig::default()).series(p)
}

/// The Hilbert series of an order ideal, with a fresh memo table.
///
/// # Errors
///
/// Propagates [`SeriesError`] from the engine.
pub fn ideal_hilbert_series(ideal: &Ideal) -> Result<HilbExpr, SeriesError> {
    HilbertSeriesEngine::new(SeriesConfig::default()).ideal_series(ideal)
}
