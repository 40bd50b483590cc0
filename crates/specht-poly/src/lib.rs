//! # specht-poly
//!
//! Dense univariate polynomial arithmetic in the variable `t`.
//!
//! Hilbert series numerators are short dense polynomials, and the only
//! division they ever need is by the linear factor `1 - t`. This crate
//! provides exactly that:
//! - [`DensePoly`] with ring operations, shifting and powering
//! - Synthetic division by `1 - t`, checked for exactness

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::PolyError;
