//! Square and cube roots.
//!
//! [`sqrt`] is an exact integer restoring square root: no multiplies, no
//! divides, one result bit per step. [`cbrt`] is a fixed-length Newton
//! iteration. Neither depends on the input for its trip count.

use crate::error::{domain_error, Result};
use crate::utils::{clamp_frac, round_shift_right, saturate};
use crate::CBRT_ITERATIONS;

/// `floor(sqrt(x << frac))` for non-negative `x`, clamped to 16 bits unsigned.
///
/// `x << frac` is below `2^30`, so the probe bit starts at `2^30` and the
/// loop runs at most 16 times.
#[inline]
pub(crate) fn restoring_sqrt(x: u16, frac: u8) -> u32 {
    let mut remainder = (x as u32) << clamp_frac(frac);
    let mut root = 0u32;
    let mut bit = 1u32 << 30;

    while bit > remainder {
        bit >>= 2;
    }

    while bit != 0 {
        if remainder >= root + bit {
            remainder -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    root.min(0xFFFF)
}

/// Square root of `x` with `frac` fractional bits.
///
/// The result is truncated (never above the true root) and saturated to
/// 16 bits. `frac` above 15 is clamped to 15.
///
/// # Errors
///
/// Negative `x` is a [`DomainError`](crate::FixedError::DomainError)
/// with fallback `0`.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{convert::from_float, sqrt};
///
/// assert_eq!(sqrt(from_float(2.25, 12), 12), Ok(from_float(1.5, 12)));
/// assert_eq!(sqrt(0, 8), Ok(0));
/// assert_eq!(sqrt(-1, 8).unwrap_err().fallback(), 0);
/// ```
pub fn sqrt(x: i16, frac: u8) -> Result<i16> {
    if x < 0 {
        return Err(domain_error("sqrt", 0));
    }
    if x == 0 {
        return Ok(0);
    }

    Ok(saturate(restoring_sqrt(x as u16, frac)))
}

/// Cube root of `a` with `frac` fractional bits.
///
/// Runs exactly [`CBRT_ITERATIONS`] Newton steps `x <- (2x + a/x^2) / 3`
/// starting from 1.0, in an `i64` accumulator. Negative inputs are handled
/// as an odd function, `cbrt(-a) == -cbrt(a)`.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{cbrt, convert::{from_float, to_float}};
///
/// let r = to_float(cbrt(from_float(27.0, 8), 8), 8);
/// assert!((r - 3.0).abs() < 0.01);
/// assert_eq!(cbrt(0, 8), 0);
/// ```
pub fn cbrt(a: i16, frac: u8) -> i16 {
    if a == 0 {
        return 0;
    }

    let frac = clamp_frac(frac);
    let magnitude = (a as i64).abs();
    let scaled = magnitude << frac;

    let mut x = 1i64 << frac;
    for _ in 0..CBRT_ITERATIONS {
        // x^2 rounds to zero only for tiny x; clamp to keep the divisor valid
        let xx = round_shift_right(x * x, frac as u32).max(1);
        x = ((x << 1) + scaled / xx) / 3;
    }

    let root = saturate(x);
    if a < 0 {
        -root
    } else {
        root
    }
}
