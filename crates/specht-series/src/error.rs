//! Hilbert series errors.

use specht_expr::ExprError;
use specht_partitions::PartitionError;
use thiserror::Error;

/// Errors that can occur while computing a Hilbert series.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Rational arithmetic failed; an internal inconsistency is fatal.
    #[error(transparent)]
    Expr(#[from] ExprError),

    /// A partition or ideal was malformed.
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// The query exceeds the configured size cap.
    #[error("partition size {size} exceeds the configured limit {limit}")]
    SizeLimitExceeded {
        /// Size of the requested partition or ideal.
        size: u32,
        /// The configured cap.
        limit: u32,
    },

    /// A smaller partition's series was not resolved before it was needed.
    #[error("no memoized series for {0}")]
    MissingSubresult(String),
}
