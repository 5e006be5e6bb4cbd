//! Ordering predicates over canonical ratios.
//!
//! Equality is structural: canonical form is unique per rational value,
//! so the derived `PartialEq`/`Eq`/`Hash` are exact and need no
//! cross-multiplication. Ordering does cross-multiply, and on extreme
//! magnitudes that can overflow; the predicate then reports the overflow
//! instead of guessing an order.

use std::cmp::Ordering;

use crate::checked;
use crate::error::RatioResult;

use super::Ratio;

impl Ratio {
    // ==================== Ordering ====================

    /// Exact ordering of two ratios.
    ///
    /// Equal denominators compare numerators directly, an overflow-free
    /// fast path. Otherwise the ratios are cross-multiplied through
    /// checked arithmetic, and the predicate fails with
    /// [`MulOverflow`](crate::RatioError::MulOverflow) rather than
    /// mis-ordering.
    pub fn checked_cmp(self, other: Self) -> RatioResult<Ordering> {
        if self.den == other.den {
            return Ok(self.num.cmp(&other.num));
        }
        let lhs = checked::mul(self.num, other.den)?;
        let rhs = checked::mul(other.num, self.den)?;
        Ok(lhs.cmp(&rhs))
    }

    /// `self < other`, exactly.
    pub fn checked_lt(self, other: Self) -> RatioResult<bool> {
        Ok(self.checked_cmp(other)?.is_lt())
    }

    /// `self <= other`, exactly: not `other < self`.
    pub fn checked_le(self, other: Self) -> RatioResult<bool> {
        Ok(!other.checked_cmp(self)?.is_lt())
    }

    /// `self > other`, exactly: `other < self`.
    pub fn checked_gt(self, other: Self) -> RatioResult<bool> {
        Ok(other.checked_cmp(self)?.is_lt())
    }

    /// `self >= other`, exactly: not `self < other`.
    pub fn checked_ge(self, other: Self) -> RatioResult<bool> {
        Ok(!self.checked_cmp(other)?.is_lt())
    }
}

/// Partial order: `None` when the cross-multiplication overflows.
///
/// Equal values always take the equal-denominator fast path, so
/// `partial_cmp` is `Some(Equal)` whenever `==` holds. There is no `Ord`
/// impl; a total order cannot be promised on extreme magnitudes.
impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(*other).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX;
    use crate::error::RatioError;

    #[test]
    fn equality_is_canonical() {
        assert_eq!(Ratio::new(2, 4), Ratio::new(1, 2));
        assert_ne!(Ratio::new(1, 2), Ratio::new(1, 3));
        assert_eq!(Ratio::new(-3, 6), Ratio::new(1, -2));
    }

    #[test]
    fn same_denominator_fast_path() {
        let a = Ratio::new(1, 7);
        let b = Ratio::new(3, 7);
        assert_eq!(a.checked_cmp(b), Ok(Ordering::Less));
        assert_eq!(b.checked_cmp(a), Ok(Ordering::Greater));
        assert_eq!(a.checked_cmp(a), Ok(Ordering::Equal));
    }

    #[test]
    fn cross_multiplied_ordering() {
        assert_eq!(
            Ratio::new(1, 3).checked_cmp(Ratio::new(1, 2)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Ratio::new(-1, 2).checked_cmp(Ratio::new(-1, 3)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            Ratio::new(2, 3).checked_cmp(Ratio::new(3, 5)),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn predicates() {
        let third = Ratio::new(1, 3);
        let half = Ratio::new(1, 2);
        assert_eq!(third.checked_lt(half), Ok(true));
        assert_eq!(third.checked_le(half), Ok(true));
        assert_eq!(half.checked_le(half), Ok(true));
        assert_eq!(half.checked_gt(third), Ok(true));
        assert_eq!(half.checked_ge(half), Ok(true));
        assert_eq!(third.checked_gt(half), Ok(false));
    }

    #[test]
    fn ordering_overflow_is_an_error() {
        // cross products of MAX/1 against 1/3 exceed the domain
        let big = Ratio::from_integer(MAX);
        let third = Ratio::new(1, 3);
        assert_eq!(
            big.checked_cmp(third),
            Err(RatioError::mul_overflow(MAX, 3))
        );
        assert!(big.partial_cmp(&third).is_none());
    }

    #[test]
    fn partial_cmp_agrees_with_checked_cmp() {
        let a = Ratio::new(5, 6);
        let b = Ratio::new(7, 8);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert!(a < b);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }
}
