//! Exact, overflow-checked rational scale factors.
//!
//! This crate provides [`Ratio`], an immutable rational number built from
//! two bounded signed integers, canonicalized at the moment of definition
//! (sign on the numerator, lowest terms, in-domain) and combined through
//! arithmetic that never silently overflows. It exists to give
//! higher-level libraries — duration and time scaling, unit conversion,
//! fixed-ratio ADC/DAC calculations — an exact, zero-rounding-error scale
//! factor that is validated once, as a constant, rather than checked on
//! every use.
//!
//! # Defining constants
//!
//! [`Ratio::new`] is `const`; an invalid definition in const context is a
//! compile error, so named constants are validated at build time:
//!
//! ```
//! use exact_ratio::Ratio;
//!
//! const TICK: Ratio = Ratio::new(1, 90_000);
//! assert_eq!(TICK.den(), 90_000);
//! ```
//!
//! Runtime inputs go through [`Ratio::try_new`], which returns a typed
//! [`RatioError`] instead of panicking:
//!
//! ```
//! use exact_ratio::{Ratio, RatioError};
//!
//! assert_eq!(Ratio::try_new(1, 0), Err(RatioError::ZeroDenominator));
//! let third = Ratio::try_new(-2, -6).unwrap();
//! assert_eq!((third.num(), third.den()), (1, 3));
//! ```
//!
//! # Combining and comparing
//!
//! Combinators pre-reduce by shared gcd factors to keep intermediates
//! small, and report overflow as an error rather than wrapping:
//!
//! ```
//! use exact_ratio::Ratio;
//!
//! let a = Ratio::new(1, 3);
//! let b = Ratio::new(1, 6);
//! assert_eq!(a.checked_add(b).unwrap(), Ratio::new(1, 2));
//! assert_eq!(a.checked_mul(b).unwrap(), Ratio::new(1, 18));
//! assert!(a.checked_lt(Ratio::new(1, 2)).unwrap());
//! ```
//!
//! # SI prefixes
//!
//! The [`si`] module is a fixed table of pre-validated magnitude
//! prefixes:
//!
//! ```
//! use exact_ratio::{Ratio, si};
//!
//! assert_eq!(si::KILO.checked_mul(si::MILLI).unwrap(), Ratio::ONE);
//! assert_eq!(si::lookup("micro"), Some(si::MICRO));
//! ```
//!
//! # Domain width
//!
//! The bounded integer domain is 64-bit by default; the `width-32` and
//! `width-128` features select the narrower and wider domains. The choice
//! is per build: it fixes [`MIN`]/[`MAX`] for every value in the process,
//! and the SI table shrinks or extends accordingly.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod checked;
pub mod domain;
pub mod error;
pub mod ratio;
pub mod si;

// Re-export core types
pub use domain::{Int, MAX, MIN, UInt};
pub use error::{RatioError, RatioResult};
pub use ratio::Ratio;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::si;
    pub use crate::{Ratio, RatioError, RatioResult};
}
