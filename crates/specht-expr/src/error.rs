//! Rational expression errors.

use specht_poly::PolyError;
use thiserror::Error;

/// Errors that can occur while building or combining rational expressions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExprError {
    /// The denominator exponent was negative.
    #[error("denominator exponent must be nonnegative, got {0}")]
    InvalidExponent(i64),

    /// Canonicalization met a numerator that `1 - t` does not divide.
    ///
    /// This never follows from user input; it signals a logic error upstream.
    #[error("internal arithmetic inconsistency: {0}")]
    InternalArithmeticInconsistency(#[from] PolyError),
}
