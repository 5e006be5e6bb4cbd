//! Basic usage of exact-ratio
//!
//! Run with: cargo run --example basic_usage

use exact_ratio::prelude::*;

// Constants are canonicalized and validated in const context; an invalid
// definition would not compile.
const HALF: Ratio = Ratio::new(2, 4);
const NTSC_FRAME: Ratio = Ratio::new(1001, 30_000);

fn main() -> Result<(), RatioError> {
    println!("=== exact-ratio basic usage ===\n");

    defining_values()?;
    combining_values()?;
    comparing_values()?;
    handling_failures();

    Ok(())
}

fn defining_values() -> RatioResult<()> {
    println!("1. Defining values:");

    // try_new canonicalizes: sign moves to the numerator, terms reduce
    let a = Ratio::try_new(-2, 6)?;
    println!("  -2/6 canonicalizes to {a}");

    let b = Ratio::try_new(4, -8)?;
    println!("  4/-8 canonicalizes to {b}");

    println!("  const HALF is {HALF}\n");
    Ok(())
}

fn combining_values() -> RatioResult<()> {
    println!("2. Combining values:");

    let third = Ratio::new(1, 3);
    let sixth = Ratio::new(1, 6);
    println!("  {third} + {sixth} = {}", third.checked_add(sixth)?);
    println!("  {third} - {sixth} = {}", third.checked_sub(sixth)?);
    println!("  {third} * {sixth} = {}", third.checked_mul(sixth)?);
    println!("  {third} / {sixth} = {}", third.checked_div(sixth)?);

    // 3003 ticks of a 90 kHz clock, in NTSC frames
    let tick = Ratio::new(1, 90_000);
    let frames = Ratio::from_integer(3003)
        .checked_mul(tick)?
        .checked_div(NTSC_FRAME)?;
    println!("  3003 ticks at {tick} = {frames} NTSC frame(s)\n");
    Ok(())
}

fn comparing_values() -> RatioResult<()> {
    println!("3. Comparing values:");

    let third = Ratio::new(1, 3);
    let half = Ratio::new(1, 2);
    println!("  {third} <  {half}: {}", third.checked_lt(half)?);
    println!("  {third} >= {half}: {}", third.checked_ge(half)?);
    println!("  2/4 == 1/2: {}\n", Ratio::new(2, 4) == half);
    Ok(())
}

fn handling_failures() {
    println!("4. Failures are eager and typed:");

    let err = Ratio::try_new(1, 0).unwrap_err();
    println!("  1/0 -> {} ({})", err, err.code());

    let max = Ratio::from_integer(exact_ratio::MAX);
    let err = max.checked_add(Ratio::ONE).unwrap_err();
    println!("  MAX + 1 -> {} ({})", err, err.code());
}
