//! # specht-series
//!
//! Hilbert series attached to partitions and to order ideals of the
//! dominance poset.
//!
//! The series of a partition `p` of `n` is defined by a recursion whose every
//! call lands on a partition of `n - 1`. [`HilbertSeriesEngine`] therefore
//! resolves whole size levels bottom-up, memoizing each partition once; a
//! level depends only on the level below it, so levels can be evaluated in
//! parallel (see [`SeriesConfig::parallel`]).
//!
//! ## Example
//!
//! ```rust,ignore
//! use specht_partitions::Partition;
//! use specht_series::{HilbertSeriesEngine, SeriesConfig};
//!
//! let mut engine = HilbertSeriesEngine::new(SeriesConfig::default());
//! let series = engine.series(&Partition::new([3, 2])?)?;
//! assert_eq!(series.to_string(), "(1 + 3*t + t^2)/(1 - t)^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod error;
mod ideal;

#[cfg(test)]
mod proptests;

pub use config::SeriesConfig;
pub use engine::HilbertSeriesEngine;
pub use error::SeriesError;
