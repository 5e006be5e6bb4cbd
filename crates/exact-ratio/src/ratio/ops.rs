//! Combinators over canonical ratios.
//!
//! Inputs are already canonical, so each operation only guards the new
//! overflow risk it introduces. The reduction strategies matter: pre-
//! dividing by shared gcd factors before any multiplication keeps
//! intermediates as small as mathematically possible, so the checked
//! primitives fail only when the exact result itself is unrepresentable
//! at lowest terms of the intermediate products.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::checked;
use crate::domain;
use crate::error::{RatioError, RatioResult};

use super::Ratio;

impl Ratio {
    // ==================== Combinators ====================

    /// Exact sum.
    ///
    /// Uses the lowest-terms-sum strategy: both denominators are divided
    /// by their gcd before cross-multiplying, which overflows far later
    /// than the naive `n1*d2 + n2*d1 / d1*d2`.
    pub fn checked_add(self, other: Self) -> RatioResult<Self> {
        // dens are positive, so g >= 1
        let g = domain::gcd(self.den, other.den);
        let lhs = checked::mul(self.num, other.den / g)?;
        let rhs = checked::mul(other.num, self.den / g)?;
        let num = checked::add(lhs, rhs)?;
        let den = checked::mul(self.den, other.den / g)?;
        Ok(Self::normalized(num, den))
    }

    /// Exact difference, as addition of the negation.
    pub fn checked_sub(self, other: Self) -> RatioResult<Self> {
        self.checked_add(other.checked_neg()?)
    }

    /// Exact product.
    ///
    /// Cross-reduces each numerator against the opposite denominator
    /// before multiplying, the overflow-minimizing strategy.
    pub fn checked_mul(self, other: Self) -> RatioResult<Self> {
        let g1 = domain::gcd(self.num, other.den);
        let g2 = domain::gcd(other.num, self.den);
        let num = checked::mul(self.num / g1, other.num / g2)?;
        let den = checked::mul(self.den / g2, other.den / g1)?;
        Ok(Self::normalized(num, den))
    }

    /// Exact quotient, as multiplication by the reciprocal.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero;
    /// [`RatioError::OutOfRange`] if the reciprocal is unrepresentable
    /// (`other.num() == MIN`); any overflow the multiplication reports.
    pub fn checked_div(self, other: Self) -> RatioResult<Self> {
        self.checked_mul(other.checked_recip()?)
    }

    /// Exact negation.
    ///
    /// # Errors
    ///
    /// [`RatioError::SubUnderflow`] if the numerator is `MIN`.
    pub fn checked_neg(self) -> RatioResult<Self> {
        Ok(Self {
            num: checked::neg(self.num)?,
            den: self.den,
        })
    }

    /// Exact absolute value.
    pub fn checked_abs(self) -> RatioResult<Self> {
        if self.is_negative() { self.checked_neg() } else { Ok(self) }
    }

    /// Exact reciprocal: swaps numerator and denominator, keeping the sign
    /// on the numerator. The input is canonical, so the result is too.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] for the zero ratio;
    /// [`RatioError::OutOfRange`] if the numerator is `MIN`, whose
    /// magnitude cannot become a denominator.
    pub fn checked_recip(self) -> RatioResult<Self> {
        if self.num == 0 {
            return Err(RatioError::DivisionByZero);
        }
        if self.num == domain::MIN {
            return Err(RatioError::out_of_range(domain::MIN_MAGNITUDE));
        }
        let den = self.num.unsigned_abs() as domain::Int;
        let num = if self.num < 0 { -self.den } else { self.den };
        Ok(Self { num, den })
    }
}

// ==================== Operator Sugar ====================
//
// The checked_* methods are the primary API. The operator impls delegate
// to them and panic on failure; composed constants are expected to be
// validated once, early, after which the operators are infallible.

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("ratio addition failed: {e}"),
        }
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("ratio subtraction failed: {e}"),
        }
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(v) => v,
            Err(e) => panic!("ratio multiplication failed: {e}"),
        }
    }
}

impl Div for Ratio {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("ratio division failed: {e}"),
        }
    }
}

impl Neg for Ratio {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(v) => v,
            Err(e) => panic!("ratio negation failed: {e}"),
        }
    }
}
