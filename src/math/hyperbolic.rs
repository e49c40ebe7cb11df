//! Hyperbolic CORDIC: sinh, cosh and tanh.
//!
//! The input is split as `x = n·ln2 + r` with `|r| <= ln2/2`. A hyperbolic
//! CORDIC in rotation mode produces `cosh(r)` and `sinh(r)`, and the
//! identities
//!
//! ```text
//! cosh(x) = cosh(r)·(2^n + 2^-n)/2 + sinh(r)·(2^n - 2^-n)/2
//! sinh(x) = sinh(r)·(2^n + 2^-n)/2 + cosh(r)·(2^n - 2^-n)/2
//! ```
//!
//! rebuild the full-range result. Hyperbolic CORDIC only converges if steps
//! 4 and 13 are executed twice, so the schedule has 18 entries for 16
//! distinct shifts.
//!
//! All internal values are Q15 in `i32`. Products go through an `i64`
//! rounding multiply and sums saturate, so large inputs clamp instead of
//! wrapping.

use crate::utils::{clamp_frac, div_q15, mul_q15, round_shift_right, saturate, signed_shift};
use crate::HYPERBOLIC_ITERATIONS;

/// `1/ln2` in Q15.
const INV_LN2_Q15: i64 = 47274;
/// `ln2` in Q15.
const LN2_Q15: i32 = 22713;
/// Pre-applied inverse hyperbolic gain, `1/prod(sqrt(1 - 2^-2i))` in Q15.
const HYPERBOLIC_GAIN: i32 = 39567;
/// `|x|` at or beyond this (12.0 in Q15) gives tanh = ±(1 - 2^-15).
const TANH_SATURATION: i32 = 12 << 15;
/// Largest `|n|` for which `2^n` still fits the Q15 accumulator.
const MAX_EXPONENT: i32 = 15;

/// `atanh(2^-i)` in Q15, indexed by shift `i`.
const ATANH_TABLE: [i32; HYPERBOLIC_ITERATIONS + 1] = [
    0, 18000, 8369, 4118, 2051, 1024, 512, 256, 128, 64, 32, 16, 8, 4, 2, 1, 1,
];

/// Shift schedule with the mandatory repeats of 4 and 13.
const SCHEDULE: [usize; HYPERBOLIC_ITERATIONS + 2] =
    [1, 2, 3, 4, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 13, 14, 15, 16];

/// Rotation-mode hyperbolic CORDIC for `|r| <= ln2/2`. Returns
/// `(cosh(r), sinh(r))` in Q15.
fn rotate(r: i32) -> (i32, i32) {
    let mut x = HYPERBOLIC_GAIN;
    let mut y = 0i32;
    let mut z = r;

    for &i in SCHEDULE.iter() {
        let x_shift = x >> i;
        let y_shift = y >> i;

        if z >= 0 {
            x += y_shift;
            y += x_shift;
            z -= ATANH_TABLE[i];
        } else {
            x -= y_shift;
            y -= x_shift;
            z += ATANH_TABLE[i];
        }
    }

    (x, y)
}

/// `2^n` and `2^-n` in Q15 for `|n| <= 15`, the small one rounded.
#[inline]
fn power_pair(n: i32) -> (i32, i32) {
    let one = 1i32 << 15;
    let k = n.unsigned_abs();
    let (big, small) = (one << k, round_shift_right(one, k));
    if n >= 0 {
        (big, small)
    } else {
        (small, big)
    }
}

/// `(cosh(x), sinh(x))` for `x` in Q15, both in Q15 and saturated to `i32`.
pub fn cosh_sinh_q15(x: i32) -> (i32, i32) {
    let n = round_shift_right(x as i64 * INV_LN2_Q15, 30);
    if n.abs() > MAX_EXPONENT as i64 {
        log::trace!("hyperbolic: exponent {n} out of range, saturating");
        let sinh = if x >= 0 { i32::MAX } else { -i32::MAX };
        return (i32::MAX, sinh);
    }

    let n = n as i32;
    let r = x - n * LN2_Q15;
    let (cosh_r, sinh_r) = rotate(r);

    let (a, b) = power_pair(n);
    let half_sum = round_shift_right(a + b, 1);
    let half_diff = round_shift_right(a - b, 1);

    let cosh = mul_q15(cosh_r, half_sum).saturating_add(mul_q15(sinh_r, half_diff));
    let sinh = mul_q15(sinh_r, half_sum).saturating_add(mul_q15(cosh_r, half_diff));
    (cosh, sinh)
}

/// `tanh(x)` for `x` in Q15, result in Q15 within `(-1, 1)`.
pub fn tanh_q15(x: i32) -> i32 {
    if x.abs() >= TANH_SATURATION {
        log::trace!("tanh: |x| beyond 12.0, saturating");
        return if x > 0 {
            i16::MAX as i32
        } else {
            -(i16::MAX as i32)
        };
    }

    let (cosh, sinh) = cosh_sinh_q15(x);
    if sinh == 0 {
        return 0;
    }
    div_q15(sinh, cosh)
}

#[inline]
fn to_q15(x: i16, x_frac: u8) -> i32 {
    signed_shift(x as i32, clamp_frac(x_frac) as i32 - 15)
}

#[inline]
fn from_q15(value: i32, y_frac: u8) -> i16 {
    saturate(signed_shift(value, 15 - clamp_frac(y_frac) as i32))
}

/// Hyperbolic sine of `x` (with `x_frac` fractional bits), returned with
/// `y_frac` fractional bits.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{sinh, convert::{from_float, to_float}};
///
/// let y = to_float(sinh(12, from_float(1.0, 12), 12), 12);
/// assert!((y - 1.1752).abs() < 2e-3);
/// ```
pub fn sinh(y_frac: u8, x: i16, x_frac: u8) -> i16 {
    from_q15(cosh_sinh_q15(to_q15(x, x_frac)).1, y_frac)
}

/// Hyperbolic cosine of `x` (with `x_frac` fractional bits), returned with
/// `y_frac` fractional bits.
pub fn cosh(y_frac: u8, x: i16, x_frac: u8) -> i16 {
    from_q15(cosh_sinh_q15(to_q15(x, x_frac)).0, y_frac)
}

/// Hyperbolic tangent of `x` (with `x_frac` fractional bits), returned with
/// `y_frac` fractional bits.
pub fn tanh(y_frac: u8, x: i16, x_frac: u8) -> i16 {
    from_q15(tanh_q15(to_q15(x, x_frac)), y_frac)
}
