//! # specht-partitions
//!
//! Integer partitions under the dominance order.
//!
//! This crate provides:
//! - [`Partition`]: an immutable value type with corner sets, dominance,
//!   meets and single-box moves
//! - [`Poset`]: all partitions of `n` with cover relations and ranks,
//!   generated breadth-first from the top element `[n]`
//! - [`Ideal`]: order ideals given by a minimal generating set, with the
//!   "smaller ideal" projection onto partitions of `n - 1`
//!
//! ## Dominance
//!
//! `P` dominates `Q` when every prefix sum of `P` is at least the matching
//! prefix sum of `Q`. Covers are the immediate steps down, i.e. moving one
//! box of the Young diagram to a lower row.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod closure;
pub mod error;
pub mod ideal;
pub mod partition;
pub mod poset;

#[cfg(test)]
mod proptests;

pub use error::PartitionError;
pub use ideal::{maximal_elements, Ideal};
pub use partition::{Corner, Partition};
pub use poset::{partitions_of, Poset};
