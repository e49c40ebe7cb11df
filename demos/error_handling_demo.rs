//! Error Handling Demonstration
//!
//! Shows how fixmath16 reports domain and range failures, and the different
//! ways a caller can react: explicit matching, taking the fallback value,
//! transforming the error, or propagating it with `?`.
//!
//! Run with `RUST_LOG=debug` to see the log records emitted when an error is
//! constructed.

use fixmath16::convert::{from_float, to_float};
use fixmath16::{arith, ln, pow, sqrt, tan, Fallback, FixedError, FixedMath, QFormat};

const Q12: u8 = 12;

fn main() {
    env_logger::init();

    println!("🔧 fixmath16 Error Handling Demonstration\n");

    // Example 1: Successful operation
    println!("✅ Example 1: Successful square root");
    let two = from_float(2.0, Q12);
    match sqrt(two, Q12) {
        Ok(root) => println!("   sqrt(2.0) = {} (raw {root})", to_float(root, Q12)),
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // Example 2: Domain error
    println!("❌ Example 2: Domain error (logarithm of a negative number)");
    let minus_one = from_float(-1.0, Q12);
    match ln(minus_one, Q12) {
        Ok(value) => println!("   Unexpected success: {value}"),
        Err(e) => {
            println!("   Error caught: {e}");
            println!("   Error type: {e:?}");
        }
    }
    println!();

    // Example 3: Different error handling strategies
    println!("🔄 Example 3: Different error handling strategies");

    println!("   Strategy 1: Pattern matching for explicit error handling");
    match tan(16384, Q12) {
        Ok(value) => println!("      Success: {value}"),
        Err(FixedError::DomainError { operation, fallback }) => {
            println!("      {operation} is undefined here, fallback {fallback}");
        }
        Err(FixedError::RangeError { operation, fallback }) => {
            println!("      {operation} overflowed, fallback {fallback}");
        }
        Err(e) => println!("      Other error: {e}"),
    }

    println!("   Strategy 2: Taking the fallback value with or_fallback()");
    let quotient = arith::div(from_float(1.0, Q12), Q12, 0, Q12).or_fallback();
    println!("      1.0 / 0.0 -> raw {quotient}");

    println!("   Strategy 3: Using unwrap_or() with a value of your own");
    let root = sqrt(minus_one, Q12).unwrap_or(-1);
    println!("      sqrt(-1.0) -> {root}");

    println!("   Strategy 4: Using map_err() for error transformation");
    let transformed = pow(0, 0, Q12).map_err(|e| format!("Custom error: {e}"));
    match transformed {
        Ok(value) => println!("      Success: {value}"),
        Err(custom_msg) => println!("      {custom_msg}"),
    }
    println!();

    // Example 4: Chaining operations with error propagation
    println!("🔗 Example 4: Chaining operations with error propagation");

    fn log_ratio(a: i16, b: i16, frac: u8) -> Result<i16, FixedError> {
        let ratio = arith::div(a, frac, b, frac)?;
        ln(ratio, frac)
    }

    let a = from_float(6.0, Q12);
    let b = from_float(2.0, Q12);
    match log_ratio(a, b, Q12) {
        Ok(value) => println!("   ln(6 / 2) = {}", to_float(value, Q12)),
        Err(e) => println!("   Failed: {e}"),
    }
    match log_ratio(a, 0, Q12) {
        Ok(value) => println!("   Unexpected success: {value}"),
        Err(e) => println!("   ln(6 / 0) failed as expected: {e}"),
    }
    println!();

    // Example 5: Format validation
    println!("📐 Example 5: Validating a format descriptor");
    for frac in [13u8, 16] {
        match QFormat::new(frac) {
            Ok(format) => println!("   {format}: range [{}, {}]", format.min(), format.max()),
            Err(e) => println!("   Rejected: {e}"),
        }
    }
    println!();

    // Example 6: Batch evaluation never fails per element
    println!("⚡ Example 6: Slices substitute fallbacks element by element");
    let inputs: Vec<i16> = [4.0f32, -4.0, 0.25]
        .iter()
        .map(|&v| from_float(v, Q12))
        .collect();
    let roots = inputs.sqrt(Q12);
    for (x, r) in inputs.iter().zip(&roots) {
        println!("   sqrt({}) -> {}", to_float(*x, Q12), to_float(*r, Q12));
    }
    println!();

    println!("✨ Summary:");
    println!("   - Math routines return Result<i16, FixedError>; overflow saturates silently");
    println!("   - Domain and range errors carry the value an embedded caller would get");
    println!("   - Slice methods apply those fallbacks automatically");
}
