//! Overflow-checked arithmetic over the bounded integer domain.
//!
//! Each operation computes the exact mathematical result or reports the
//! typed overflow error; nothing here wraps, saturates, or silently widens
//! past the domain. The platform's checked primitives realize the boundary
//! predicates (`a > MAX - b`, `a < MIN - b`, `|a|*|b| > MAX`) directly at
//! domain width.

use tracing::trace;

use crate::domain::Int;
use crate::error::{RatioError, RatioResult};

/// Exact sum of `a` and `b`.
#[inline]
pub fn add(a: Int, b: Int) -> RatioResult<Int> {
    a.checked_add(b).ok_or_else(|| {
        trace!(lhs = %a, rhs = %b, "checked addition overflowed");
        RatioError::add_overflow(a, b)
    })
}

/// Exact difference of `a` and `b`.
///
/// Equivalent to `add(a, -b)` with the `b == MIN` negation edge detected
/// as underflow.
#[inline]
pub fn sub(a: Int, b: Int) -> RatioResult<Int> {
    a.checked_sub(b).ok_or_else(|| {
        trace!(lhs = %a, rhs = %b, "checked subtraction underflowed");
        RatioError::sub_underflow(a, b)
    })
}

/// Exact product of `a` and `b`.
#[inline]
pub fn mul(a: Int, b: Int) -> RatioResult<Int> {
    a.checked_mul(b).ok_or_else(|| {
        trace!(lhs = %a, rhs = %b, "checked multiplication overflowed");
        RatioError::mul_overflow(a, b)
    })
}

/// Exact negation of `a`.
///
/// Negation is `0 - a`; it fails as underflow for `a == MIN`.
#[inline]
pub fn neg(a: Int) -> RatioResult<Int> {
    a.checked_neg().ok_or_else(|| {
        trace!(value = %a, "checked negation underflowed");
        RatioError::sub_underflow(0, a)
    })
}
