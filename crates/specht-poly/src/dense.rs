//! Dense univariate polynomials in `t`.
//!
//! Coefficients are stored in ascending degree order and kept normalized:
//! no trailing zeros, and the zero polynomial is the single coefficient `[0]`.
//! Numerators arising from Hilbert series stay small (degree well under a
//! few hundred), so multiplication is always schoolbook.

use crate::error::PolyError;
use specht_rings::traits::{OrderedRing, Ring};
use std::fmt;

/// A dense univariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial c * t^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// The linear polynomial `1 - t`.
    #[must_use]
    pub fn one_minus_t() -> Self {
        Self::new(vec![R::one(), -R::one()])
    }

    /// `(1 - t)^k`, expanded by the binomial theorem.
    #[must_use]
    pub fn one_minus_t_pow(k: usize) -> Self {
        // Row k of Pascal's triangle with alternating signs.
        let mut row = vec![R::one()];
        for _ in 0..k {
            let mut next = Vec::with_capacity(row.len() + 1);
            next.push(R::one());
            for i in 1..row.len() {
                next.push(row[i].clone() - row[i - 1].clone());
            }
            next.push(-row[row.len() - 1].clone());
            row = next;
        }
        Self::new(row)
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of t^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Evaluates at `t = 1`, i.e. sums the coefficients.
    #[must_use]
    pub fn eval_at_one(&self) -> R {
        self.coeffs
            .iter()
            .cloned()
            .fold(R::zero(), |acc, c| acc + c)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Self::new(result)
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by t^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::new(coeffs)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Divides by `1 - t`, returning `(quotient, remainder)`.
    ///
    /// The remainder is the constant `self(1)`. The quotient coefficients are
    /// negated suffix sums: `q_k = -(c_{k+1} + ... + c_d)`.
    #[must_use]
    pub fn div_one_minus_t(&self) -> (Self, R) {
        let d = self.degree();
        if d == 0 {
            return (Self::zero(), self.coeffs[0].clone());
        }

        let mut quotient = vec![R::zero(); d];
        let mut suffix = R::zero();
        for k in (0..d).rev() {
            suffix = suffix + self.coeffs[k + 1].clone();
            quotient[k] = -suffix.clone();
        }
        let remainder = suffix + self.coeffs[0].clone();

        (Self::new(quotient), remainder)
    }

    /// Divides by `1 - t`, failing unless the division is exact.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InexactDivision`] when `self(1) != 0`.
    pub fn exact_div_one_minus_t(&self) -> Result<Self, PolyError> {
        let (quotient, remainder) = self.div_one_minus_t();
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(PolyError::InexactDivision {
                remainder: format!("{remainder:?}"),
            })
        }
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let negative = c.signum() < 0;
            let magnitude = c.abs();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", if negative { '-' } else { '+' })?;
            }
            first = false;

            match (i, magnitude.is_one()) {
                (0, _) => write!(f, "{magnitude}")?,
                (1, true) => write!(f, "t")?,
                (1, false) => write!(f, "{magnitude}*t")?,
                (_, true) => write!(f, "t^{i}")?,
                (_, false) => write!(f, "{magnitude}*t^{i}")?,
            }
        }

        Ok(())
    }
}
