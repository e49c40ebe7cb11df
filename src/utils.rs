//! Saturation and rescaling primitives shared by every fixed-point routine.
//!
//! All arithmetic happens in a wide accumulator (`i32` or `i64`) and is
//! narrowed exactly once at the end through [`saturate`]. Any change of the
//! effective fractional-bit count goes through [`round_shift_right`] or
//! [`signed_shift`] so that rounding is symmetric around zero everywhere in
//! the crate.

use num::{PrimInt, Signed};

/// Largest supported number of fractional bits.
pub const MAX_FRAC: u8 = 15;

/// Clamps a fractional-bit count into the supported `0..=15` range.
#[inline(always)]
pub fn clamp_frac(frac: u8) -> u8 {
    frac.min(MAX_FRAC)
}

#[inline(always)]
fn bit_width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

/// Narrows `value` into `U`, clamping to `U`'s bounds instead of wrapping.
#[inline(always)]
pub fn saturate_as<U: PrimInt, T: PrimInt>(value: T) -> U {
    match <U as num::NumCast>::from(value) {
        Some(v) => v,
        None if value < T::zero() => U::min_value(),
        None => U::max_value(),
    }
}

/// Clamps a wide accumulator to `[i16::MIN, i16::MAX]`.
///
/// # Examples
///
/// ```rust
/// use fixmath16::utils::saturate;
///
/// assert_eq!(saturate(40_000i32), i16::MAX);
/// assert_eq!(saturate(-40_000i64), i16::MIN);
/// assert_eq!(saturate(-123i32), -123);
/// ```
#[inline(always)]
pub fn saturate<T: PrimInt>(value: T) -> i16 {
    saturate_as::<i16, T>(value)
}

/// Arithmetic right shift by `n` with round-half-away-from-zero.
///
/// Negative operands round symmetrically with positive ones, so
/// `round_shift_right(-v, n) == -round_shift_right(v, n)` for every `v`
/// whose negation is representable. Shifting by the full width or more
/// yields zero.
///
/// # Examples
///
/// ```rust
/// use fixmath16::utils::round_shift_right;
///
/// assert_eq!(round_shift_right(5i32, 1), 3);   //  2.5 ->  3
/// assert_eq!(round_shift_right(-5i32, 1), -3); // -2.5 -> -3
/// assert_eq!(round_shift_right(-5i32, 2), -1); // -1.25 -> -1
/// assert_eq!(round_shift_right(77i32, 0), 77);
/// ```
#[inline(always)]
pub fn round_shift_right<T: PrimInt + Signed>(value: T, n: u32) -> T {
    if n == 0 {
        return value;
    }
    if n >= bit_width::<T>() {
        return T::zero();
    }

    let n = n as usize;
    if value >= T::zero() {
        let r = value >> (n - 1);
        (r >> 1) + (r & T::one())
    } else {
        // floor((v + 2^(n-1) - 1) / 2^n) == -round(|v| / 2^n), without negating v
        (value + (T::one() << (n - 1)) - T::one()) >> n
    }
}

/// Rescales `value` by `2^-n`.
///
/// Positive `n` is a rounding right shift. Negative `n` is a plain left
/// shift; it cannot lose precision but may overflow the accumulator, which
/// only the caller's final [`saturate`] catches.
#[inline(always)]
pub fn signed_shift<T: PrimInt + Signed>(value: T, n: i32) -> T {
    if n >= 0 {
        return round_shift_right(value, n as u32);
    }

    let left = n.unsigned_abs();
    if left >= bit_width::<T>() {
        T::zero()
    } else {
        value << left as usize
    }
}

/// Divides with round-half-away-from-zero.
///
/// # Panics
///
/// Panics if `den` is zero. Every caller in this crate checks its divisor
/// first (or divides by a non-zero constant) and reports a
/// [`FixedError`](crate::FixedError) instead.
#[inline(always)]
pub fn div_round(num: i64, den: i64) -> i64 {
    debug_assert!(den != 0, "div_round: zero divisor");
    let magnitude = (num.unsigned_abs() + den.unsigned_abs() / 2) / den.unsigned_abs();
    let q = magnitude as i64;
    if (num < 0) != (den < 0) {
        -q
    } else {
        q
    }
}

/// Rounding Q15 multiply with an `i64` intermediate, saturated to `i32`.
#[inline(always)]
pub fn mul_q15(a: i32, b: i32) -> i32 {
    saturate_as(round_shift_right(a as i64 * b as i64, 15))
}

/// Rounding Q15 division saturated to the open interval `(-1, 1)`.
///
/// A zero denominator yields the extreme matching the numerator's sign.
#[inline(always)]
pub fn div_q15(num: i32, den: i32) -> i32 {
    if den == 0 {
        return if num >= 0 { i16::MAX as i32 } else { -(i16::MAX as i32) };
    }

    let q = div_round((num as i64) << 15, den as i64);
    q.clamp(-(i16::MAX as i64), i16::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_bounds() {
        assert_eq!(saturate(0i32), 0);
        assert_eq!(saturate(32767i32), 32767);
        assert_eq!(saturate(32768i32), 32767);
        assert_eq!(saturate(-32768i32), -32768);
        assert_eq!(saturate(-32769i32), -32768);
        assert_eq!(saturate(i64::MAX), i16::MAX);
        assert_eq!(saturate(i64::MIN), i16::MIN);
    }

    #[test]
    fn test_saturate_as_i32() {
        assert_eq!(saturate_as::<i32, i64>(1 << 40), i32::MAX);
        assert_eq!(saturate_as::<i32, i64>(-(1 << 40)), i32::MIN);
        assert_eq!(saturate_as::<i32, i64>(-7), -7);
    }

    #[test]
    fn test_round_shift_right_identity() {
        for v in [-32768i32, -3, -1, 0, 1, 3, 32767] {
            assert_eq!(round_shift_right(v, 0), v);
        }
    }

    #[test]
    fn test_round_shift_right_symmetric() {
        for v in -5000i32..=5000 {
            for n in 1..12 {
                assert_eq!(
                    round_shift_right(-v, n),
                    -round_shift_right(v, n),
                    "asymmetric rounding for v={v}, n={n}"
                );
            }
        }
    }

    #[test]
    fn test_round_shift_right_matches_float_rounding() {
        for v in -2000i32..=2000 {
            for n in 1..8u32 {
                let expected = (v as f64 / (1u32 << n) as f64).round() as i32;
                assert_eq!(round_shift_right(v, n), expected, "v={v}, n={n}");
            }
        }
    }

    #[test]
    fn test_round_shift_right_extremes() {
        assert_eq!(round_shift_right(i32::MIN, 31), -1);
        assert_eq!(round_shift_right(i32::MAX, 31), 1);
        assert_eq!(round_shift_right(i32::MAX, 32), 0);
        assert_eq!(round_shift_right(i64::MIN, 1), i64::MIN / 2);
    }

    #[test]
    fn test_signed_shift() {
        assert_eq!(signed_shift(3i32, -4), 48);
        assert_eq!(signed_shift(48i32, 4), 3);
        assert_eq!(signed_shift(-24i32, 4), -2); // -1.5 -> -2
        assert_eq!(signed_shift(5i32, 0), 5);
        assert_eq!(signed_shift(5i32, -40), 0);
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(7, 2), 4);
        assert_eq!(div_round(-7, 2), -4);
        assert_eq!(div_round(7, -2), -4);
        assert_eq!(div_round(5, 3), 2);
        assert_eq!(div_round(-4, 3), -1);
    }

    #[test]
    fn test_mul_q15() {
        // 0.5 * 0.5 = 0.25
        assert_eq!(mul_q15(16384, 16384), 8192);
        assert_eq!(mul_q15(-16384, 16384), -8192);
        assert_eq!(mul_q15(i32::MAX, i32::MAX), i32::MAX);
        assert_eq!(mul_q15(i32::MIN, i32::MAX), i32::MIN);
    }

    #[test]
    fn test_div_q15() {
        assert_eq!(div_q15(1, 2), 16384);
        assert_eq!(div_q15(-1, 2), -16384);
        assert_eq!(div_q15(5, 5), 32767);
        assert_eq!(div_q15(-5, 5), -32767);
        assert_eq!(div_q15(3, 0), 32767);
        assert_eq!(div_q15(-3, 0), -32767);
    }
}
