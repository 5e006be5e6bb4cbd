//! The canonical rational value.

use std::fmt;

use tracing::trace;

use crate::domain::{self, Int, MAX_MAGNITUDE, MIN_MAGNITUDE, UInt};
use crate::error::{RatioError, RatioResult};

mod cmp;
mod ops;
#[cfg(feature = "serde")]
mod serde;

/// An exact rational number over the bounded integer domain.
///
/// A `Ratio` is always in canonical form:
///
/// - the denominator is positive (any sign lives on the numerator),
/// - numerator and denominator are coprime (lowest terms),
/// - both components are within `[MIN, MAX]` of the configured width.
///
/// Values are immutable once constructed; combinators return new values.
/// Canonical form is unique per rational quantity, so the derived `Eq` and
/// `Hash` are exact.
///
/// ```
/// use exact_ratio::Ratio;
///
/// const ONE_THIRD: Ratio = Ratio::new(-2, -6);
/// assert_eq!(ONE_THIRD.num(), 1);
/// assert_eq!(ONE_THIRD.den(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: Int,
    den: Int,
}

/// Why a raw `(num, den)` pair has no canonical form. Internal to the
/// constructor pair; `try_new` maps it onto [`RatioError`], `new` panics.
enum Malformed {
    ZeroDenominator,
    NumOutOfRange(UInt),
    DenOutOfRange(UInt),
}

/// Reduce `(num, den)` to canonical form.
///
/// Works over unsigned magnitudes so that `MIN`-magnitude inputs reduce
/// correctly whenever the canonical form is representable, and fail
/// cleanly when it is not.
const fn canonicalize(num: Int, den: Int) -> Result<(Int, Int), Malformed> {
    if den == 0 {
        return Err(Malformed::ZeroDenominator);
    }
    let g = domain::gcd_magnitude(num.unsigned_abs(), den.unsigned_abs());
    // den != 0, so g >= 1
    let num_mag = num.unsigned_abs() / g;
    let den_mag = den.unsigned_abs() / g;
    let negative = (num < 0) != (den < 0);

    if den_mag > MAX_MAGNITUDE {
        return Err(Malformed::DenOutOfRange(den_mag));
    }
    let canonical_den = den_mag as Int;

    let canonical_num = if negative && num_mag != 0 {
        if num_mag > MIN_MAGNITUDE {
            return Err(Malformed::NumOutOfRange(num_mag));
        }
        // num_mag == MIN_MAGNITUDE casts to MIN directly; wrapping_neg is
        // then the identity, which is the value we want.
        (num_mag as Int).wrapping_neg()
    } else {
        if num_mag > MAX_MAGNITUDE {
            return Err(Malformed::NumOutOfRange(num_mag));
        }
        num_mag as Int
    };

    Ok((canonical_num, canonical_den))
}

impl Ratio {
    // ==================== Constants ====================

    /// The rational zero, `0/1`.
    pub const ZERO: Self = Self::from_integer(0);

    /// The rational one, `1/1`.
    pub const ONE: Self = Self::from_integer(1);

    // ==================== Constructors ====================

    /// Create a canonical ratio from raw numerator and denominator.
    ///
    /// Intended for long-lived named constants: the function is `const`,
    /// so an invalid definition in const context is a compile error, the
    /// definition-time validation this crate is built around.
    ///
    /// ```
    /// use exact_ratio::Ratio;
    ///
    /// const FRAME_TIME: Ratio = Ratio::new(1001, 30_000);
    /// assert_eq!(FRAME_TIME, Ratio::new(2002, 60_000));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `den == 0` or the canonical form is not representable.
    /// For runtime inputs use [`Ratio::try_new`].
    pub const fn new(num: Int, den: Int) -> Self {
        match canonicalize(num, den) {
            Ok((num, den)) => Self { num, den },
            Err(Malformed::ZeroDenominator) => panic!("denominator must not be zero"),
            Err(_) => panic!("canonical form is not representable in the domain"),
        }
    }

    /// Create a canonical ratio, validating raw inputs into the domain.
    ///
    /// Raw parts are accepted at the widest integer width and range-checked
    /// against the configured domain, so narrower builds reject what they
    /// cannot represent instead of truncating.
    ///
    /// # Errors
    ///
    /// [`RatioError::ZeroDenominator`] if `den == 0`;
    /// [`RatioError::OutOfRange`] if a raw input or a canonical component
    /// falls outside `[MIN, MAX]`.
    pub fn try_new(num: i128, den: i128) -> RatioResult<Self> {
        let num = Int::try_from(num).map_err(|_| {
            trace!(num = %num, "rejected ratio definition: numerator outside the domain");
            RatioError::out_of_range(num)
        })?;
        let den = Int::try_from(den).map_err(|_| {
            trace!(den = %den, "rejected ratio definition: denominator outside the domain");
            RatioError::out_of_range(den)
        })?;
        match canonicalize(num, den) {
            Ok((num, den)) => Ok(Self { num, den }),
            Err(Malformed::ZeroDenominator) => {
                trace!(num = %num, "rejected ratio definition: zero denominator");
                Err(RatioError::ZeroDenominator)
            }
            Err(Malformed::NumOutOfRange(mag)) => {
                trace!(num = %num, den = %den, "rejected ratio definition: canonical numerator out of range");
                let value = if (num < 0) != (den < 0) {
                    format!("-{mag}")
                } else {
                    mag.to_string()
                };
                Err(RatioError::out_of_range(value))
            }
            Err(Malformed::DenOutOfRange(mag)) => {
                trace!(num = %num, den = %den, "rejected ratio definition: canonical denominator out of range");
                Err(RatioError::out_of_range(mag))
            }
        }
    }

    /// Create a ratio with denominator 1.
    pub const fn from_integer(num: Int) -> Self {
        Self { num, den: 1 }
    }

    /// Re-reduce a combinator result. `den` must already be positive and
    /// both components in-domain; reduction can only shrink magnitudes, so
    /// this cannot fail.
    pub(crate) fn normalized(num: Int, den: Int) -> Self {
        debug_assert!(den > 0);
        let g = domain::gcd_magnitude(num.unsigned_abs(), den.unsigned_abs()) as Int;
        Self {
            num: num / g,
            den: den / g,
        }
    }

    // ==================== Accessors ====================

    /// Canonical numerator; carries the sign.
    #[inline]
    pub const fn num(&self) -> Int {
        self.num
    }

    /// Canonical denominator; always positive.
    #[inline]
    pub const fn den(&self) -> Int {
        self.den
    }

    // ==================== State Checks ====================

    /// Whether this is the rational zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Whether this ratio is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Whether the canonical denominator is 1.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// The numerator, if the denominator is 1.
    #[inline]
    pub const fn to_integer(&self) -> Option<Int> {
        if self.is_integer() { Some(self.num) } else { None }
    }
}

// ==================== Conversions ====================

impl From<Int> for Ratio {
    #[inline]
    fn from(num: Int) -> Self {
        Self::from_integer(num)
    }
}

// ==================== Display ====================

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// ==================== Default ====================

impl Default for Ratio {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

static_assertions::assert_impl_all!(Ratio: Send, Sync, Copy);
static_assertions::const_assert!(size_of::<Ratio>() == 2 * size_of::<Int>());
