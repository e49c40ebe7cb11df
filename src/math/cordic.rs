//! Circular CORDIC: sine, cosine, tangent and the inverse functions.
//!
//! # Angle convention
//!
//! Angles in and out of this module are π-normalized Q1.15 values: the
//! stored integer `a` stands for `a / 32768 * π` radians, so the full `i16`
//! range covers `[-π, π)`. [`ANGLE_PI`] is the closest positive value to π.
//!
//! # Algorithm
//!
//! Rotation mode ([`sin_cos`]) starts from `(K, 0)` with `K ≈ 0.6073` and
//! rotates by `±atan(2^-i)` for `i = 0..14`, steering the residual angle
//! toward zero. Vectoring mode ([`atan2`]) runs the same micro-rotations
//! the other way, driving `y` to zero and accumulating the angle. Both use
//! only shifts, adds and a 14-entry table.
//!
//! Measured over every Q1.15 angle, `sin` and `cos` stay within about
//! `3.7e-4` of the exact values.

use crate::error::{domain_error, Result};
use crate::math::roots::restoring_sqrt;
use crate::utils::{clamp_frac, round_shift_right, saturate, signed_shift};
use crate::CORDIC_ITERATIONS;

/// π in the normalized angle convention (`0x7FFF`).
pub const ANGLE_PI: i16 = i16::MAX;
/// -π in the normalized angle convention.
pub const ANGLE_MINUS_PI: i16 = i16::MIN;
/// π/2 in the normalized angle convention.
pub const ANGLE_HALF_PI: i16 = 16384;

/// `atan(2^-i) / π` in Q1.15.
const ATAN_TABLE: [i32; CORDIC_ITERATIONS] = [
    0x2000, 0x12E4, 0x09FB, 0x0511, 0x028B, 0x0146, 0x00A3, 0x0051, 0x0029, 0x0014, 0x000A,
    0x0005, 0x0003, 0x0001,
];

/// Reciprocal CORDIC gain `prod(1/sqrt(1 + 2^-2i))` in Q1.15.
const CORDIC_GAIN: i32 = 0x4DBA;

/// Q1.15 one, as used for the reference vector in [`atan`].
const ONE_Q15: i32 = 1 << 15;

/// Computes sine and cosine of a normalized angle in one pass.
///
/// Returns `(sin, cos)` in Q1.15.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{sin_cos, cordic::ANGLE_HALF_PI};
///
/// let (s, c) = sin_cos(ANGLE_HALF_PI / 3); // π/6
/// assert!((s as f32 / 32768.0 - 0.5).abs() < 5e-4);
/// assert!((c as f32 / 32768.0 - 0.8660254).abs() < 5e-4);
/// ```
pub fn sin_cos(angle: i16) -> (i16, i16) {
    let mut z = angle as i32;
    let mut flip_cos = false;

    // fold into [-π/2, π/2]: sin(π - θ) = sin θ, cos(π - θ) = -cos θ
    if z > ANGLE_HALF_PI as i32 {
        z = ANGLE_PI as i32 - z;
        flip_cos = true;
    } else if z < -(ANGLE_HALF_PI as i32) {
        z = ANGLE_MINUS_PI as i32 - z;
        flip_cos = true;
    }

    let mut x = CORDIC_GAIN;
    let mut y = 0i32;

    for (i, &step) in ATAN_TABLE.iter().enumerate() {
        let x_shift = x >> i;
        let y_shift = y >> i;

        if z >= 0 {
            x -= y_shift;
            y += x_shift;
            z -= step;
        } else {
            x += y_shift;
            y -= x_shift;
            z += step;
        }

        x = saturate(x) as i32;
        y = saturate(y) as i32;
    }

    let cos = if flip_cos { -x } else { x };
    (saturate(y), saturate(cos))
}

/// Sine of a normalized angle, in Q1.15.
#[inline]
pub fn sin(angle: i16) -> i16 {
    sin_cos(angle).0
}

/// Cosine of a normalized angle, in Q1.15.
#[inline]
pub fn cos(angle: i16) -> i16 {
    sin_cos(angle).1
}

/// Tangent of a normalized angle, returned with `frac` fractional bits.
///
/// # Errors
///
/// Exactly ±π/2 is a [`DomainError`](crate::FixedError::DomainError) whose
/// fallback is `+i16::MAX` at +π/2 and `-i16::MAX` at -π/2. A cosine that
/// rounds to zero elsewhere is reported the same way, signed like the sine.
pub fn tan(angle: i16, frac: u8) -> Result<i16> {
    if angle == ANGLE_HALF_PI {
        return Err(domain_error("tan", i16::MAX));
    }
    if angle == -ANGLE_HALF_PI {
        return Err(domain_error("tan", -i16::MAX));
    }

    let (sin, cos) = sin_cos(angle);
    if cos == 0 {
        let fallback = if sin >= 0 { i16::MAX } else { -i16::MAX };
        return Err(domain_error("tan", fallback));
    }

    let ratio_q15 = ((sin as i64) << 15) / cos as i64;
    let shift = 15 - clamp_frac(frac) as i32;
    Ok(saturate(signed_shift(ratio_q15, shift)))
}

/// Angle of the vector `(x, y)`, normalized to `[-π, π]`.
///
/// Follows the usual quadrant rules: `atan2(0, x) == 0` for `x >= 0`
/// (including the origin), `atan2(0, x) == ANGLE_PI` for `x < 0`, and
/// `±ANGLE_HALF_PI` on the vertical axis. Left half-plane vectors are
/// reflected through the origin and corrected by ±π afterwards, choosing
/// the sign from the original `y`.
///
/// # Examples
///
/// ```rust
/// use fixmath16::{atan2, cordic::{ANGLE_HALF_PI, ANGLE_PI}};
///
/// assert_eq!(atan2(0, 5), 0);
/// assert_eq!(atan2(0, -5), ANGLE_PI);
/// assert_eq!(atan2(5, 0), ANGLE_HALF_PI);
/// assert_eq!(atan2(-5, 0), -ANGLE_HALF_PI);
/// assert_eq!(atan2(0, 0), 0);
/// ```
pub fn atan2(y: i16, x: i16) -> i16 {
    if y == 0 {
        return if x >= 0 { 0 } else { ANGLE_PI };
    }
    if x == 0 {
        return if y > 0 { ANGLE_HALF_PI } else { -ANGLE_HALF_PI };
    }

    let (mut xi, mut yi) = if x < 0 {
        (-(x as i32), -(y as i32))
    } else {
        (x as i32, y as i32)
    };
    let mut z = 0i32;

    for (i, &step) in ATAN_TABLE.iter().enumerate() {
        if yi == 0 {
            break;
        }

        let x_shift = xi >> i;
        let y_shift = yi >> i;

        if yi > 0 {
            xi += y_shift;
            yi -= x_shift;
            z += step;
        } else {
            xi -= y_shift;
            yi += x_shift;
            z -= step;
        }
    }

    if x < 0 {
        if y >= 0 {
            z += ANGLE_PI as i32;
        } else {
            z -= ANGLE_PI as i32;
        }
    }

    saturate(z)
}

/// Arctangent of `y` (with `frac` fractional bits), as a normalized angle
/// in `(-π/2, π/2)`.
///
/// `y` is brought to Q15 first. While it exceeds ±1.0 both it and the
/// reference `x = 1.0` are halved, which leaves the angle unchanged.
pub fn atan(y: i16, frac: u8) -> i16 {
    let mut yi = signed_shift(y as i32, clamp_frac(frac) as i32 - 15);
    let mut xi = ONE_Q15;
    let mut halvings = 0u32;

    while !(-ONE_Q15..=ONE_Q15).contains(&yi) {
        yi = round_shift_right(yi, 1);
        xi = round_shift_right(xi, 1);
        halvings += 1;
    }

    if halvings > 0 {
        log::trace!("atan: rescaled input by 2^-{halvings}");
    }

    atan2(saturate(yi), saturate(xi))
}

/// `sqrt(1 - x^2)` in Q1.15, the adjacent side for [`asin`] and [`acos`].
#[inline]
fn complement_q15(x: i16) -> i16 {
    let square = ((x as i32) * (x as i32)) >> 15;
    // square <= 1.0, and 1.0 itself saturates to 0x7FFF
    let remainder = saturate(ONE_Q15 - square).max(0);
    saturate(restoring_sqrt(remainder as u16, 15))
}

/// Arcsine of a Q1.15 value, as a normalized angle in `[-π/2, π/2]`.
pub fn asin(x: i16) -> i16 {
    atan2(x, complement_q15(x))
}

/// Arccosine of a Q1.15 value, as a normalized angle in `[0, π]`.
pub fn acos(x: i16) -> i16 {
    atan2(complement_q15(x), x)
}
