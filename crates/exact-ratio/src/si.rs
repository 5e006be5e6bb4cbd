//! SI magnitude prefixes as pre-validated ratio constants.
//!
//! Each constant is canonicalized in const context, so an entry that did
//! not fit the configured domain would fail the build rather than exist
//! half-checked. Narrower builds omit the entries their domain cannot
//! represent; wider builds extend the table.

use crate::ratio::Ratio;

/// 10^-24. Requires the 128-bit domain.
#[cfg(feature = "width-128")]
pub const YOCTO: Ratio = Ratio::new(1, 1_000_000_000_000_000_000_000_000);
/// 10^-21. Requires the 128-bit domain.
#[cfg(feature = "width-128")]
pub const ZEPTO: Ratio = Ratio::new(1, 1_000_000_000_000_000_000_000);
/// 10^-18.
#[cfg(not(feature = "width-32"))]
pub const ATTO: Ratio = Ratio::new(1, 1_000_000_000_000_000_000);
/// 10^-15.
#[cfg(not(feature = "width-32"))]
pub const FEMTO: Ratio = Ratio::new(1, 1_000_000_000_000_000);
/// 10^-12.
#[cfg(not(feature = "width-32"))]
pub const PICO: Ratio = Ratio::new(1, 1_000_000_000_000);
/// 10^-9.
pub const NANO: Ratio = Ratio::new(1, 1_000_000_000);
/// 10^-6.
pub const MICRO: Ratio = Ratio::new(1, 1_000_000);
/// 10^-3.
pub const MILLI: Ratio = Ratio::new(1, 1_000);
/// 10^-2.
pub const CENTI: Ratio = Ratio::new(1, 100);
/// 10^-1.
pub const DECI: Ratio = Ratio::new(1, 10);
/// 10^1.
pub const DECA: Ratio = Ratio::new(10, 1);
/// 10^2.
pub const HECTO: Ratio = Ratio::new(100, 1);
/// 10^3.
pub const KILO: Ratio = Ratio::new(1_000, 1);
/// 10^6.
pub const MEGA: Ratio = Ratio::new(1_000_000, 1);
/// 10^9.
pub const GIGA: Ratio = Ratio::new(1_000_000_000, 1);
/// 10^12.
#[cfg(not(feature = "width-32"))]
pub const TERA: Ratio = Ratio::new(1_000_000_000_000, 1);
/// 10^15.
#[cfg(not(feature = "width-32"))]
pub const PETA: Ratio = Ratio::new(1_000_000_000_000_000, 1);
/// 10^18.
#[cfg(not(feature = "width-32"))]
pub const EXA: Ratio = Ratio::new(1_000_000_000_000_000_000, 1);
/// 10^21. Requires the 128-bit domain.
#[cfg(feature = "width-128")]
pub const ZETTA: Ratio = Ratio::new(1_000_000_000_000_000_000_000, 1);
/// 10^24. Requires the 128-bit domain.
#[cfg(feature = "width-128")]
pub const YOTTA: Ratio = Ratio::new(1_000_000_000_000_000_000_000_000, 1);

/// The fixed lookup table for the configured domain, smallest prefix
/// first.
#[cfg(feature = "width-32")]
pub const PREFIXES: &[(&str, Ratio)] = &[
    ("nano", NANO),
    ("micro", MICRO),
    ("milli", MILLI),
    ("centi", CENTI),
    ("deci", DECI),
    ("deca", DECA),
    ("hecto", HECTO),
    ("kilo", KILO),
    ("mega", MEGA),
    ("giga", GIGA),
];

/// The fixed lookup table for the configured domain, smallest prefix
/// first.
#[cfg(all(not(feature = "width-32"), not(feature = "width-128")))]
pub const PREFIXES: &[(&str, Ratio)] = &[
    ("atto", ATTO),
    ("femto", FEMTO),
    ("pico", PICO),
    ("nano", NANO),
    ("micro", MICRO),
    ("milli", MILLI),
    ("centi", CENTI),
    ("deci", DECI),
    ("deca", DECA),
    ("hecto", HECTO),
    ("kilo", KILO),
    ("mega", MEGA),
    ("giga", GIGA),
    ("tera", TERA),
    ("peta", PETA),
    ("exa", EXA),
];

/// The fixed lookup table for the configured domain, smallest prefix
/// first.
#[cfg(feature = "width-128")]
pub const PREFIXES: &[(&str, Ratio)] = &[
    ("yocto", YOCTO),
    ("zepto", ZEPTO),
    ("atto", ATTO),
    ("femto", FEMTO),
    ("pico", PICO),
    ("nano", NANO),
    ("micro", MICRO),
    ("milli", MILLI),
    ("centi", CENTI),
    ("deci", DECI),
    ("deca", DECA),
    ("hecto", HECTO),
    ("kilo", KILO),
    ("mega", MEGA),
    ("giga", GIGA),
    ("tera", TERA),
    ("peta", PETA),
    ("exa", EXA),
    ("zetta", ZETTA),
    ("yotta", YOTTA),
];

/// Look up a prefix by its SI name.
pub fn lookup(name: &str) -> Option<Ratio> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| *prefix == name)
        .map(|(_, ratio)| *ratio)
}
