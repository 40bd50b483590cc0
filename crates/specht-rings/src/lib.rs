//! # specht-rings
//!
//! Coefficient rings for the Specht Hilbert series workspace.
//!
//! This crate provides:
//! - The abstract [`Ring`] trait (and [`OrderedRing`] for sign-aware display)
//! - The integer ring [`Z`], backed by `dashu` arbitrary precision integers
//!
//! Numerators of Hilbert series grow quickly with the partition size, so
//! every coefficient is an exact bigint; there is no overflow path.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use traits::{OrderedRing, Ring};
