//! The SI prefix table as pre-validated scale factors
//!
//! Run with: cargo run --example si_prefixes

use exact_ratio::prelude::*;

fn main() -> Result<(), RatioError> {
    println!("=== SI prefixes for the configured domain ===\n");

    for (name, ratio) in si::PREFIXES {
        println!("  {name:>6} = {ratio}");
    }

    println!("\n=== prefix algebra ===\n");

    // rescaling between magnitudes is exact
    let milli_per_nano = si::MILLI.checked_div(si::NANO)?;
    println!("  milli / nano = {milli_per_nano}");

    let unity = si::KILO.checked_mul(si::MILLI)?;
    println!("  kilo * milli = {unity}");

    // 1500 milliseconds expressed in seconds: 3/2, no rounding anywhere
    let seconds = Ratio::from_integer(1500).checked_mul(si::MILLI)?;
    println!("  1500 ms = {seconds} s");

    Ok(())
}
