//! Polynomial arithmetic errors.

use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Division by `1 - t` left a nonzero remainder.
    #[error("division by (1 - t) is not exact: remainder {remainder}")]
    InexactDivision {
        /// The remainder, rendered for diagnostics.
        remainder: String,
    },
}
