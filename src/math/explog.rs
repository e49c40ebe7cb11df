//! Exponential, logarithms and power.
//!
//! `exp` evaluates the Taylor series of `e^|x|` with a fixed number of Horner
//! passes and takes the reciprocal for negative inputs. `ln` inverts `exp`
//! with a fixed number of Halley steps `y += 2(x - e^y)/(x + e^y)`, which
//! converge cubically. `log2`, `log10` and `pow` are built from those two.
//!
//! Accuracy is best for moderate magnitudes: the 13-term series loses
//! accuracy once `|x|` approaches 10, and four Halley steps from `y = 0`
//! can move `y` by at most 8.

use crate::error::{domain_error, range_error, Result};
use crate::utils::{clamp_frac, div_round, round_shift_right, saturate, saturate_as};
use crate::{EXP_ITERATIONS, LOG_ITERATIONS};

/// `ln 2` in Q15.
const LN2_Q15: i64 = 22713;
/// `ln 10` in Q15, wider than 16 bits.
const LN10_Q15: i64 = 75451;

/// `e^x` for a wide `x` with `frac` fractional bits, saturated to `i32`.
pub(crate) fn exp_wide(x: i32, frac: u8) -> Result<i32> {
    let frac = clamp_frac(frac);
    let one = 1i64 << frac;
    let magnitude = (x as i64).abs();

    let mut result = one;
    for k in (1..=EXP_ITERATIONS as i64).rev() {
        result = div_round(result * magnitude, k << frac) + one;
        result = saturate_as::<i32, i64>(result) as i64;
    }

    if x >= 0 {
        return Ok(result as i32);
    }
    // every pass adds `one`, so the series is at least 1 here; the check
    // only keeps the reciprocal's divisor non-zero if that ever changes
    if result == 0 {
        return Err(range_error("exp", i16::MAX));
    }

    Ok(div_round(one << frac, result) as i32)
}

/// `ln(x)` for a wide positive `x`, reporting errors under `operation`.
fn ln_wide(x: i32, frac: u8, operation: &'static str) -> Result<i32> {
    if x < 0 {
        return Err(domain_error(operation, i16::MIN));
    }
    if x == 0 {
        return Err(range_error(operation, i16::MIN));
    }

    let frac = clamp_frac(frac);
    let x = x as i64;
    let mut y = 0i64;
    for _ in 0..LOG_ITERATIONS {
        let exp_y = exp_wide(saturate_as(y), frac)? as i64;
        y += ((x - exp_y) << (frac + 1)) / (x + exp_y);
    }

    Ok(saturate_as(y))
}

/// `ln(x) / ln(base)`, with `ln(base)` given as a non-zero Q15 constant.
///
/// Taking `ln(base)` in the caller's format would round `ln 2` to zero in
/// Q0, so the divisor is always the Q15 constant.
fn log_base(x: i16, frac: u8, ln_base_q15: i64, operation: &'static str) -> Result<i16> {
    let ln_x = ln_wide(x as i32, frac, operation)?;
    Ok(saturate(div_round((ln_x as i64) << 15, ln_base_q15)))
}

/// `e^x` with `frac` fractional bits, saturated.
///
/// # Errors
///
/// A [`RangeError`](crate::FixedError::RangeError) if the series for a
/// negative input collapses to zero before the reciprocal is taken.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{exp, convert::{from_float, to_float}};
///
/// let e = to_float(exp(from_float(1.0, 12), 12).unwrap(), 12);
/// assert!((e - std::f32::consts::E).abs() < 1e-3);
/// ```
pub fn exp(x: i16, frac: u8) -> Result<i16> {
    exp_wide(x as i32, frac).map(saturate)
}

/// Natural logarithm of `x` with `frac` fractional bits.
///
/// # Errors
///
/// Negative `x` is a [`DomainError`](crate::FixedError::DomainError), zero
/// is a [`RangeError`](crate::FixedError::RangeError) (pole). Both fall back
/// to `i16::MIN`.
pub fn ln(x: i16, frac: u8) -> Result<i16> {
    ln_wide(x as i32, frac, "ln").map(saturate)
}

/// Base-2 logarithm, `ln(x) / ln(2)`. Errors as for [`ln`].
pub fn log2(x: i16, frac: u8) -> Result<i16> {
    log_base(x, frac, LN2_Q15, "log2")
}

/// Base-10 logarithm, `ln(x) / ln(10)`. Errors as for [`ln`].
pub fn log10(x: i16, frac: u8) -> Result<i16> {
    log_base(x, frac, LN10_Q15, "log10")
}

/// `x` raised to the power `n`, both with `frac` fractional bits.
///
/// Computed as `exp(n * ln|x|)`. A negative base requires an integral
/// exponent; odd exponents negate the result.
///
/// # Errors
///
/// [`DomainError`](crate::FixedError::DomainError) for `0^n` with `n <= 0`
/// (fallback `i16::MAX`) and for a negative base with a fractional exponent
/// (fallback `0`).
///
/// # Examples
///
/// ```rust
/// use fixmath16::{pow, convert::{from_float, to_float}};
///
/// let r = to_float(pow(from_float(-2.0, 8), from_float(3.0, 8), 8).unwrap(), 8);
/// assert!((r + 8.0).abs() < 0.1);
/// assert!(pow(from_float(-1.0, 8), from_float(0.5, 8), 8).is_err());
/// ```
pub fn pow(x: i16, n: i16, frac: u8) -> Result<i16> {
    let frac = clamp_frac(frac);

    if x == 0 {
        if n <= 0 {
            return Err(domain_error("pow", i16::MAX));
        }
        return Ok(0);
    }

    let negative_base = x < 0;
    if negative_base && (n as i32) & ((1i32 << frac) - 1) != 0 {
        return Err(domain_error("pow", 0));
    }

    let ln_x = ln_wide((x as i32).abs(), frac, "pow")?;
    let scaled = round_shift_right(ln_x as i64 * n as i64, frac as u32);
    let result = exp_wide(saturate_as(scaled), frac)?;

    let odd_exponent = negative_base && (n >> frac) & 1 == 1;
    Ok(saturate(if odd_exponent { -result } else { result }))
}
