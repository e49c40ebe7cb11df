//! Conversions between fixed-point values, integers, floats and other
//! Q-formats.
//!
//! Float conversions exist for setup code and tests; none of the math
//! routines touch floating point.

use crate::utils::{clamp_frac, round_shift_right, saturate, signed_shift};

/// Converts `value` to fixed point with `frac` fractional bits.
///
/// Rounds half away from zero and saturates out-of-range inputs. `NaN`
/// maps to zero.
///
/// # Examples
///
/// ```rust
/// use fixmath16::convert::{from_float, to_float};
///
/// assert_eq!(from_float(1.5, 8), 384);
/// assert_eq!(from_float(1000.0, 8), i16::MAX);
/// assert_eq!(to_float(from_float(-0.25, 12), 12), -0.25);
/// ```
#[inline]
pub fn from_float(value: f32, frac: u8) -> i16 {
    let scaled = (value * (1u32 << clamp_frac(frac)) as f32).round();
    // `as` maps NaN to zero
    scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Converts a fixed-point value to `f32`. Exact for every input.
#[inline]
pub fn to_float(value: i16, frac: u8) -> f32 {
    value as f32 / (1u32 << clamp_frac(frac)) as f32
}

/// Converts an integer to fixed point, saturating when it does not fit.
#[inline]
pub fn from_int(value: i16, frac: u8) -> i16 {
    saturate((value as i32) << clamp_frac(frac))
}

/// Integer part of a fixed-point value, rounded to nearest (`lround`).
#[inline]
pub fn to_int(value: i16, frac: u8) -> i16 {
    saturate(round_shift_right(value as i32, clamp_frac(frac) as u32))
}

/// Rescales `value` from `from_frac` to `to_frac` fractional bits.
///
/// Dropping bits rounds, adding bits saturates.
///
/// # Examples
///
/// ```rust
/// use fixmath16::convert::convert;
///
/// // 1.5 in Q8 -> Q12
/// assert_eq!(convert(384, 8, 12), 6144);
/// // 3.0 in Q8 -> Q14 does not fit (max ~2.0)
/// assert_eq!(convert(768, 8, 14), i16::MAX);
/// ```
#[inline]
pub fn convert(value: i16, from_frac: u8, to_frac: u8) -> i16 {
    let shift = clamp_frac(from_frac) as i32 - clamp_frac(to_frac) as i32;
    saturate(signed_shift(value as i32, shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_float_rounding() {
        // 0.5 LSB rounds away from zero
        assert_eq!(from_float(0.5 / 256.0, 8), 1);
        assert_eq!(from_float(-0.5 / 256.0, 8), -1);
        assert_eq!(from_float(0.49 / 256.0, 8), 0);
    }

    #[test]
    fn test_from_float_saturates() {
        assert_eq!(from_float(1.0, 15), i16::MAX);
        assert_eq!(from_float(-1.0, 15), i16::MIN);
        assert_eq!(from_float(f32::INFINITY, 4), i16::MAX);
        assert_eq!(from_float(f32::NEG_INFINITY, 4), i16::MIN);
        assert_eq!(from_float(f32::NAN, 4), 0);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(from_int(3, 12), 12288);
        assert_eq!(from_int(8, 12), i16::MAX);
        assert_eq!(from_int(-8, 12), i16::MIN);
        assert_eq!(to_int(from_float(2.5, 8), 8), 3);
        assert_eq!(to_int(from_float(-2.5, 8), 8), -3);
        assert_eq!(to_int(from_float(2.25, 8), 8), 2);
    }

    #[test]
    fn test_convert_between_formats() {
        assert_eq!(convert(6144, 12, 8), 384);
        assert_eq!(convert(-1, 12, 8), 0);
        assert_eq!(convert(-8, 12, 8), -1); // -0.5 LSB rounds away
        assert_eq!(convert(1234, 7, 7), 1234);
    }
}
