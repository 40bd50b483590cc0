//! # specht-expr
//!
//! Exact rational expressions of the shape `h(t) / (1 - t)^a`.
//!
//! Every Hilbert series in this workspace has a denominator that is a pure
//! power of `1 - t`, so a value is a pair `(h, a)` and common-denominator
//! arithmetic reduces to exponent arithmetic. Values are always kept in
//! canonical form: `a` is minimal, so `h(1) != 0` whenever `a > 0`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hilb_expr;

#[cfg(test)]
mod proptests;

pub use error::ExprError;
pub use hilb_expr::HilbExpr;
