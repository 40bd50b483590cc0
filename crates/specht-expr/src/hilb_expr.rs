//! Rational expressions `h(t) / (1 - t)^a` over the integers.

use crate::error::ExprError;
use specht_poly::DensePoly;
use specht_rings::{Ring, Z};
use std::fmt;
use std::ops::Neg;
use tracing::trace;

/// An exact rational expression `h(t) / (1 - t)^a` with integer numerator.
///
/// Values are canonical on construction: if `a > 0` then `h(1) != 0`, and the
/// zero expression always has `a == 0`. Canonical forms are unique, so two
/// expressions are equal exactly when their `(h, a)` pairs are.
#[derive(Clone, Debug)]
pub struct HilbExpr {
    /// Numerator polynomial.
    h: DensePoly<Z>,
    /// Exponent of the `1 - t` denominator.
    a: usize,
}

impl HilbExpr {
    /// Builds `h / (1 - t)^a` and brings it to canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InternalArithmeticInconsistency`] if cancelling a
    /// factor of `1 - t` ever leaves a remainder.
    pub fn new(h: DensePoly<Z>, a: usize) -> Result<Self, ExprError> {
        Self { h, a }.canonicalize()
    }

    /// Builds `h / (1 - t)^a` from a signed exponent.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidExponent`] when `a < 0`.
    pub fn with_exponent(h: DensePoly<Z>, a: i64) -> Result<Self, ExprError> {
        let a = usize::try_from(a).map_err(|_| ExprError::InvalidExponent(a))?;
        Self::new(h, a)
    }

    /// A polynomial, i.e. a zero denominator exponent.
    #[must_use]
    pub fn from_poly(h: DensePoly<Z>) -> Self {
        Self { h, a: 0 }
    }

    /// The zero expression.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_poly(DensePoly::zero())
    }

    /// The constant 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_poly(DensePoly::one())
    }

    /// `1 / (1 - t)^a`, the Hilbert series of a polynomial ring in `a` variables.
    #[must_use]
    pub fn free(a: usize) -> Self {
        Self {
            h: DensePoly::one(),
            a,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &DensePoly<Z> {
        &self.h
    }

    /// Returns the denominator exponent.
    #[must_use]
    pub fn exponent(&self) -> usize {
        self.a
    }

    /// Returns true if this is the zero expression.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.h.is_zero()
    }

    /// Degree of the numerator.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.h.degree()
    }

    /// The numerator evaluated at `t = 1`.
    ///
    /// For a canonical Hilbert series with `a > 0` this is the multiplicity
    /// (degree) of the graded module.
    #[must_use]
    pub fn eval_numerator_at_one(&self) -> Z {
        self.h.eval_at_one()
    }

    /// Cancels every common factor of `1 - t`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InternalArithmeticInconsistency`] if a division
    /// that should be exact leaves a remainder.
    pub fn canonicalize(mut self) -> Result<Self, ExprError> {
        if self.h.is_zero() {
            self.a = 0;
            return Ok(self);
        }

        let before = self.a;
        while self.a > 0 && self.h.eval_at_one().is_zero() {
            self.h = self.h.exact_div_one_minus_t()?;
            self.a -= 1;
        }
        if self.a != before {
            trace!(from = before, to = self.a, "cancelled (1 - t) factors");
        }

        Ok(self)
    }

    /// The numerator rewritten over `(1 - t)^target`, `target >= self.a`.
    fn numerator_over(&self, target: usize, powers: &mut Vec<DensePoly<Z>>) -> DensePoly<Z> {
        let k = target - self.a;
        if k == 0 {
            return self.h.clone();
        }
        while powers.len() <= k {
            let next = powers[powers.len() - 1].mul(&DensePoly::one_minus_t());
            powers.push(next);
        }
        self.h.mul(&powers[k])
    }

    /// Adds two expressions over their common denominator.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprError::InternalArithmeticInconsistency`].
    pub fn add(&self, other: &Self) -> Result<Self, ExprError> {
        Self::add_many([self, other])
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprError::InternalArithmeticInconsistency`].
    pub fn sub(&self, other: &Self) -> Result<Self, ExprError> {
        self.add(&-other)
    }

    /// Sums any number of expressions with a single canonicalization.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprError::InternalArithmeticInconsistency`].
    pub fn add_many<'a, I>(terms: I) -> Result<Self, ExprError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let terms: Vec<&Self> = terms.into_iter().collect();
        let a = terms.iter().map(|x| x.a).max().unwrap_or(0);

        let mut powers = vec![DensePoly::one()];
        let h = terms
            .iter()
            .filter(|x| !x.is_zero())
            .fold(DensePoly::zero(), |acc, x| {
                acc.add(&x.numerator_over(a, &mut powers))
            });

        Self::new(h, a)
    }

    /// Multiplies two expressions.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprError::InternalArithmeticInconsistency`].
    pub fn mul(&self, other: &Self) -> Result<Self, ExprError> {
        Self::new(self.h.mul(&other.h), self.a + other.a)
    }

    /// Multiplies by `t^k`.
    ///
    /// `t^k` is 1 at `t = 1`, so the result is still canonical.
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        Self {
            h: self.h.shift(k),
            a: self.a,
        }
    }

    /// Divides by `1 - t`.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprError::InternalArithmeticInconsistency`].
    pub fn over_one_minus_t(&self) -> Result<Self, ExprError> {
        Self::new(self.h.clone(), self.a + 1)
    }

    /// Expands the first `count` coefficients of the power series at `t = 0`.
    ///
    /// Dividing by `1 - t` is a running prefix sum, so `a` passes of prefix
    /// sums over the numerator give the series.
    #[must_use]
    pub fn series_coefficients(&self, count: usize) -> Vec<Z> {
        let mut coeffs: Vec<Z> = (0..count).map(|i| self.h.coeff(i)).collect();
        for _ in 0..self.a {
            let mut running = Z::zero();
            for c in &mut coeffs {
                running = running + c.clone();
                *c = running.clone();
            }
        }
        coeffs
    }
}

impl PartialEq for HilbExpr {
    fn eq(&self, other: &Self) -> bool {
        let a = self.a.max(other.a);
        let lhs = self.h.mul(&DensePoly::one_minus_t_pow(a - self.a));
        let rhs = other.h.mul(&DensePoly::one_minus_t_pow(a - other.a));
        lhs == rhs
    }
}

impl Eq for HilbExpr {}

impl Neg for &HilbExpr {
    type Output = HilbExpr;

    fn neg(self) -> HilbExpr {
        HilbExpr {
            h: self.h.neg(),
            a: self.a,
        }
    }
}

impl Neg for HilbExpr {
    type Output = HilbExpr;

    fn neg(self) -> HilbExpr {
        -&self
    }
}

impl fmt::Display for HilbExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            0 => write!(f, "{}", self.h),
            1 => write!(f, "({})/(1 - t)", self.h),
            a => write!(f, "({})/(1 - t)^{a}", self.h),
        }
    }
}
