//! Saturating arithmetic, rounding and comparison helpers.
//!
//! Two values added or subtracted must share a format. Multiplication and
//! division take the format of each operand and return the result in the
//! format of the first one; [`fma`] returns in the format of the addend.

use crate::convert::to_int;
use crate::error::{domain_error, range_error, Result};
use crate::utils::{clamp_frac, div_round, round_shift_right, saturate, signed_shift};

#[inline(always)]
fn frac_mask(frac: u8) -> i32 {
    (1i32 << clamp_frac(frac)) - 1
}

/// Saturating addition of two values in the same format.
///
/// ```rust
/// use fixmath16::arith::add;
///
/// assert_eq!(add(32767, 1), 32767);
/// assert_eq!(add(-32768, -1), -32768);
/// ```
#[inline]
pub fn add(a: i16, b: i16) -> i16 {
    a.saturating_add(b)
}

/// Saturating subtraction of two values in the same format.
#[inline]
pub fn sub(a: i16, b: i16) -> i16 {
    a.saturating_sub(b)
}

/// Rounded product `a * b`, returned in `a`'s format.
///
/// Only `b_frac` affects the arithmetic; `a`'s format carries through.
#[inline]
pub fn mult(a: i16, _a_frac: u8, b: i16, b_frac: u8) -> i16 {
    saturate(round_shift_right(
        a as i32 * b as i32,
        clamp_frac(b_frac) as u32,
    ))
}

/// Rounded quotient `a / b`, returned in `a`'s format.
///
/// Division by zero is a range error whose fallback is the extreme
/// matching the dividend's sign.
#[inline]
pub fn div(a: i16, _a_frac: u8, b: i16, b_frac: u8) -> Result<i16> {
    if b == 0 {
        let fallback = if a >= 0 { i16::MAX } else { i16::MIN };
        return Err(range_error("div", fallback));
    }

    let num = (a as i64) << clamp_frac(b_frac);
    Ok(saturate(div_round(num, b as i64)))
}

/// Fused multiply-add `x * y + z`, rounded once, returned in `z_frac` format.
#[inline]
pub fn fma(x: i16, x_frac: u8, y: i16, y_frac: u8, z: i16, z_frac: u8) -> i16 {
    let product = x as i64 * y as i64;
    let shift = clamp_frac(x_frac) as i32 + clamp_frac(y_frac) as i32 - clamp_frac(z_frac) as i32;
    saturate(signed_shift(product, shift) + z as i64)
}

/// Saturating left shift.
#[inline]
pub fn shift_left(value: i16, n: u32) -> i16 {
    saturate(signed_shift(value as i64, -(n.min(32) as i32)))
}

/// Rounding right shift.
#[inline]
pub fn shift_right(value: i16, n: u32) -> i16 {
    saturate(round_shift_right(value as i32, n))
}

/// Largest integer value not greater than `x`.
#[inline]
pub fn floor(x: i16, frac: u8) -> i16 {
    saturate(x as i32 & !frac_mask(frac))
}

/// Smallest integer value not less than `x`, saturated.
#[inline]
pub fn ceil(x: i16, frac: u8) -> i16 {
    let mask = frac_mask(frac);
    saturate((x as i32 + mask) & !mask)
}

/// `x` rounded toward zero.
#[inline]
pub fn trunc(x: i16, frac: u8) -> i16 {
    if x >= 0 {
        floor(x, frac)
    } else {
        ceil(x, frac)
    }
}

/// `x` rounded to the nearest integer value, halfway cases away from zero.
/// The result stays in `frac` format and saturates.
#[inline]
pub fn round(x: i16, frac: u8) -> i16 {
    let frac = clamp_frac(frac);
    saturate(round_shift_right(x as i32, frac as u32) << frac)
}

/// `x` rounded to the nearest integer, returned as a plain integer.
#[inline]
pub fn lround(x: i16, frac: u8) -> i16 {
    to_int(x, frac)
}

/// Remainder of `x / y` truncated toward zero, with the sign of `x`.
///
/// Computed exactly in a common format, then returned in `x_frac` format.
/// A zero divisor is a domain error with fallback `0`.
pub fn fmod(x: i16, x_frac: u8, y: i16, y_frac: u8) -> Result<i16> {
    if y == 0 {
        return Err(domain_error("fmod", 0));
    }

    let (x_frac, y_frac) = (clamp_frac(x_frac), clamp_frac(y_frac));
    let common_x = (x as i64) << y_frac;
    let common_y = (y as i64) << x_frac;
    let remainder = common_x % common_y;
    Ok(saturate(round_shift_right(remainder, y_frac as u32)))
}

/// Absolute value, saturating `i16::MIN` to `i16::MAX`.
#[inline]
pub fn fabs(x: i16) -> i16 {
    x.saturating_abs()
}

/// Integer part of `|x|`, still in `frac` format.
#[inline]
pub fn abs(x: i16, frac: u8) -> i16 {
    saturate((x as i32).abs() & !frac_mask(frac))
}

/// Magnitude of `x` with the sign of `y`.
#[inline]
pub fn copysign(x: i16, y: i16) -> i16 {
    let magnitude = (x as i32).abs();
    saturate(if y < 0 { -magnitude } else { magnitude })
}

/// Larger of two values in the same format.
#[inline]
pub fn fmax(x: i16, y: i16) -> i16 {
    x.max(y)
}

/// Smaller of two values in the same format.
#[inline]
pub fn fmin(x: i16, y: i16) -> i16 {
    x.min(y)
}

/// Positive difference `max(x - y, 0)`, saturated.
#[inline]
pub fn fdim(x: i16, y: i16) -> i16 {
    if x > y {
        sub(x, y)
    } else {
        0
    }
}

/// Next representable value after `x` in the direction of `y`.
#[inline]
pub fn next_after(x: i16, y: i16) -> i16 {
    match x.cmp(&y) {
        std::cmp::Ordering::Less => x + 1,
        std::cmp::Ordering::Greater => x - 1,
        std::cmp::Ordering::Equal => y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{from_float, to_float};

    const Q8: u8 = 8;

    fn q8(v: f32) -> i16 {
        from_float(v, Q8)
    }

    #[test]
    fn test_add_sub_saturate() {
        assert_eq!(add(32767, 1), 32767);
        assert_eq!(sub(-32768, 1), -32768);
        assert_eq!(add(q8(1.5), q8(2.25)), q8(3.75));
        assert_eq!(sub(q8(1.5), q8(2.25)), q8(-0.75));
    }

    #[test]
    fn test_mult() {
        assert_eq!(mult(q8(1.5), Q8, q8(-2.0), Q8), q8(-3.0));
        // Q8 * Q12 stays in Q8
        assert_eq!(mult(q8(2.0), Q8, from_float(0.25, 12), 12), q8(0.5));
        assert_eq!(mult(q8(100.0), Q8, q8(100.0), Q8), i16::MAX);
        assert_eq!(mult(q8(-100.0), Q8, q8(100.0), Q8), i16::MIN);
    }

    #[test]
    fn test_div() {
        assert_eq!(div(q8(3.0), Q8, q8(2.0), Q8), Ok(q8(1.5)));
        assert_eq!(div(q8(-1.0), Q8, q8(3.0), Q8), Ok(q8(-1.0 / 3.0)));
        assert_eq!(div(q8(100.0), Q8, q8(0.5), Q8), Ok(i16::MAX));

        let err = div(q8(-1.0), Q8, 0, Q8).unwrap_err();
        assert_eq!(err.fallback(), i16::MIN);
        assert_eq!(div(q8(1.0), Q8, 0, Q8).unwrap_err().fallback(), i16::MAX);
    }

    #[test]
    fn test_fma() {
        let r = fma(q8(1.5), Q8, from_float(2.0, 12), 12, from_float(0.25, 10), 10);
        assert_eq!(r, from_float(3.25, 10));
        assert_eq!(fma(q8(100.0), Q8, q8(100.0), Q8, 0, Q8), i16::MAX);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(shift_left(3, 4), 48);
        assert_eq!(shift_left(3000, 8), i16::MAX);
        assert_eq!(shift_left(-3000, 8), i16::MIN);
        assert_eq!(shift_right(-24, 4), -2);
    }

    #[test]
    fn test_floor_ceil_trunc_round() {
        let cases = [2.5f32, -2.5, 2.25, -2.25, 3.0, -3.0, 0.75, -0.75];
        for v in cases {
            let x = q8(v);
            assert_eq!(to_float(floor(x, Q8), Q8), v.floor(), "floor({v})");
            assert_eq!(to_float(ceil(x, Q8), Q8), v.ceil(), "ceil({v})");
            assert_eq!(to_float(trunc(x, Q8), Q8), v.trunc(), "trunc({v})");
            assert_eq!(to_float(round(x, Q8), Q8), v.round(), "round({v})");
            assert_eq!(lround(x, Q8), v.round() as i16, "lround({v})");
        }
    }

    #[test]
    fn test_ceil_and_round_saturate() {
        let near_max = q8(127.5);
        assert_eq!(ceil(near_max, Q8), i16::MAX);
        assert_eq!(round(near_max, Q8), i16::MAX);
        assert_eq!(floor(i16::MIN, Q8), i16::MIN);
    }

    #[test]
    fn test_fmod() {
        assert_eq!(fmod(q8(5.5), Q8, q8(2.0), Q8), Ok(q8(1.5)));
        assert_eq!(fmod(q8(-5.5), Q8, q8(2.0), Q8), Ok(q8(-1.5)));
        assert_eq!(fmod(q8(5.5), Q8, from_float(-2.0, 12), 12), Ok(q8(1.5)));
        assert_eq!(fmod(i16::MIN, 0, -1, 0), Ok(0));
        assert_eq!(fmod(q8(1.0), Q8, 0, Q8).unwrap_err().fallback(), 0);
    }

    #[test]
    fn test_abs_family() {
        assert_eq!(fabs(i16::MIN), i16::MAX);
        assert_eq!(fabs(q8(-2.75)), q8(2.75));
        assert_eq!(abs(q8(-2.75), Q8), q8(2.0));
        assert_eq!(copysign(q8(2.0), q8(-0.1)), q8(-2.0));
        assert_eq!(copysign(i16::MIN, 1), i16::MAX);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(fmax(q8(1.0), q8(-1.0)), q8(1.0));
        assert_eq!(fmin(q8(1.0), q8(-1.0)), q8(-1.0));
        assert_eq!(fdim(q8(1.0), q8(3.0)), 0);
        assert_eq!(fdim(q8(3.0), q8(1.0)), q8(2.0));
        assert_eq!(fdim(i16::MAX, i16::MIN), i16::MAX);
        assert_eq!(next_after(10, 20), 11);
        assert_eq!(next_after(10, -20), 9);
        assert_eq!(next_after(10, 10), 10);
    }
}
