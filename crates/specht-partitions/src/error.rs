//! Partition and ideal construction errors.

use thiserror::Error;

/// Errors raised while constructing partitions and ideals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The parts were empty or contained a non-positive integer.
    #[error("invalid partition {parts:?}: {reason}")]
    InvalidPartition {
        /// The rejected parts.
        parts: Vec<i64>,
        /// What was wrong with them.
        reason: &'static str,
    },

    /// A generator does not sum to the ideal's size.
    #[error("generator {generator} has size {found}, ideal is over partitions of {expected}")]
    MismatchedSize {
        /// The rejected generator (or ideal), rendered.
        generator: String,
        /// The ideal's declared size.
        expected: u32,
        /// The generator's actual size.
        found: u32,
    },
}
