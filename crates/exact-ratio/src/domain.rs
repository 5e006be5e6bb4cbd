//! The bounded signed-integer domain all ratio arithmetic is defined over.
//!
//! The width is a build-time choice: 64-bit by default, 32-bit with the
//! `width-32` feature, 128-bit with the `width-128` feature. Every value and
//! every intermediate check in this crate is defined against `[MIN, MAX]` of
//! the selected width; a result outside that range is an error, never a wrap.

#[cfg(all(feature = "width-32", feature = "width-128"))]
compile_error!("features `width-32` and `width-128` are mutually exclusive");

/// Signed integer of the configured domain width.
#[cfg(feature = "width-32")]
pub type Int = i32;
/// Unsigned magnitude counterpart of [`Int`].
#[cfg(feature = "width-32")]
pub type UInt = u32;

/// Signed integer of the configured domain width.
#[cfg(all(not(feature = "width-32"), feature = "width-128"))]
pub type Int = i128;
/// Unsigned magnitude counterpart of [`Int`].
#[cfg(all(not(feature = "width-32"), feature = "width-128"))]
pub type UInt = u128;

/// Signed integer of the configured domain width.
#[cfg(all(not(feature = "width-32"), not(feature = "width-128")))]
pub type Int = i64;
/// Unsigned magnitude counterpart of [`Int`].
#[cfg(all(not(feature = "width-32"), not(feature = "width-128")))]
pub type UInt = u64;

/// Smallest representable domain value, `-(2^(W-1))`.
pub const MIN: Int = Int::MIN;

/// Largest representable domain value, `2^(W-1) - 1`.
pub const MAX: Int = Int::MAX;

/// Magnitude of [`MAX`].
pub(crate) const MAX_MAGNITUDE: UInt = MAX.unsigned_abs();

/// Magnitude of [`MIN`], one more than [`MAX_MAGNITUDE`].
pub(crate) const MIN_MAGNITUDE: UInt = MIN.unsigned_abs();

// ==================== Sign and Magnitude ====================

/// Sign of `x`: -1 if negative, +1 otherwise.
///
/// Zero maps to +1. Zero has no sign of its own, but normalization
/// arithmetic needs it to pick a side; this is a convention, not a math
/// fact.
#[inline]
pub const fn sign(x: Int) -> Int {
    if x < 0 { -1 } else { 1 }
}

/// Absolute value within the signed domain.
///
/// # Panics
///
/// Panics if `x == MIN`, whose magnitude is not representable as [`Int`].
/// Use [`magnitude`] when the result is consumed as an unsigned value.
#[inline]
pub const fn abs(x: Int) -> Int {
    assert!(x != MIN, "magnitude of MIN is not representable in the domain");
    if x >= 0 { x } else { -x }
}

/// Absolute value of `x` as an unsigned magnitude. Total, including `MIN`.
#[inline]
pub const fn magnitude(x: Int) -> UInt {
    x.unsigned_abs()
}

// ==================== Greatest Common Divisor ====================

/// Greatest common divisor by the iterative Euclidean algorithm, computed
/// over the magnitudes of `a` and `b`.
///
/// `gcd(a, 0) == |a|`, `gcd(0, b) == |b|`, and `gcd(0, 0)` is defined as 0;
/// callers must guard the zero case before using the result as a divisor.
///
/// # Panics
///
/// Panics when the mathematical result is `2^(W-1)` (both operands drawn
/// from `{0, MIN}`), which exceeds [`MAX`].
#[inline]
pub const fn gcd(a: Int, b: Int) -> Int {
    let g = gcd_magnitude(a.unsigned_abs(), b.unsigned_abs());
    assert!(g <= MAX_MAGNITUDE, "gcd magnitude exceeds the domain");
    g as Int
}

/// Euclidean gcd over unsigned magnitudes. Total; the canonicalization
/// paths use this form so that `MIN`-magnitude operands reduce correctly.
pub(crate) const fn gcd_magnitude(a: UInt, b: UInt) -> UInt {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

// ==================== Power-of-Two Helpers ====================

/// `2^exp` as a domain value.
///
/// # Panics
///
/// Panics if `2^exp` exceeds [`MAX`].
#[inline]
pub const fn power_of_two(exp: u32) -> Int {
    assert!(exp < Int::BITS - 1, "power of two exceeds the domain");
    1 << exp
}

/// Floor of the base-2 logarithm of a positive value.
///
/// # Panics
///
/// Panics if `x <= 0`.
#[inline]
pub const fn log2(x: Int) -> u32 {
    assert!(x > 0, "log2 is only defined for positive values");
    x.ilog2()
}

/// [`log2`] restricted to exact powers of two.
///
/// # Panics
///
/// Panics if `x` is not a power of two.
#[inline]
pub const fn strict_log2(x: Int) -> u32 {
    assert!(is_power_of_two(x), "value is not a power of two");
    log2(x)
}

/// Whether `x` is a positive power of two.
#[inline]
pub const fn is_power_of_two(x: Int) -> bool {
    x > 0 && (x & (x - 1)) == 0
}
