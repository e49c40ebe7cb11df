//! Element-wise evaluation over slices of fixed-point values.
//!
//! [`FixedMath`] evaluates one function for every element of a slice.
//! [`ParFixedMath`] does the same on the rayon thread pool (feature
//! `parallel`). Angles use the π-normalized Q1.15 convention of
//! [`cordic`](crate::cordic). Elements that hit a domain or range error
//! receive that error's fallback value, as with
//! [`Fallback::or_fallback`](crate::Fallback::or_fallback).

use crate::error::Result;

/// Sequential element-wise fixed-point math.
///
/// # Examples
///
/// ```rust
/// use fixmath16::FixedMath;
///
/// let squares: Vec<i16> = vec![0, 1 << 8, 4 << 8, 9 << 8];
/// assert_eq!(squares.sqrt(8), vec![0, 1 << 8, 2 << 8, 3 << 8]);
///
/// // negative inputs take the sqrt fallback
/// assert_eq!([-5i16].sqrt(8), vec![0]);
/// ```
pub trait FixedMath {
    type Output;

    /// Sine of each normalized angle, in Q1.15.
    fn sin(&self) -> Self::Output;
    /// Cosine of each normalized angle, in Q1.15.
    fn cos(&self) -> Self::Output;
    /// Tangent of each normalized angle, with `frac` fractional bits.
    fn tan(&self, frac: u8) -> Self::Output;
    /// Arcsine of each Q1.15 value, as a normalized angle.
    fn asin(&self) -> Self::Output;
    /// Arccosine of each Q1.15 value, as a normalized angle.
    fn acos(&self) -> Self::Output;
    /// Arctangent of each value with `frac` fractional bits.
    fn atan(&self, frac: u8) -> Self::Output;
    /// Angle of each `(self[i], x[i])` vector.
    ///
    /// Fails with a validation error when the slices differ in length.
    fn atan2(&self, x: &Self) -> Result<Self::Output>;
    /// Square root of each value.
    fn sqrt(&self, frac: u8) -> Self::Output;
    /// Cube root of each value.
    fn cbrt(&self, frac: u8) -> Self::Output;
    /// `e^x` of each value.
    fn exp(&self, frac: u8) -> Self::Output;
    /// Natural logarithm of each value.
    fn ln(&self, frac: u8) -> Self::Output;
    /// Hyperbolic sine, input with `x_frac` and output with `y_frac` bits.
    fn sinh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
    /// Hyperbolic cosine, input with `x_frac` and output with `y_frac` bits.
    fn cosh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
    /// Hyperbolic tangent, input with `x_frac` and output with `y_frac` bits.
    fn tanh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
}

/// Parallel element-wise fixed-point math.
///
/// Inputs shorter than [`PARALLEL_THRESHOLD`](crate::PARALLEL_THRESHOLD)
/// are evaluated sequentially. Results are identical to [`FixedMath`].
#[cfg(feature = "parallel")]
pub trait ParFixedMath {
    type Output;

    /// Parallel [`FixedMath::sin`].
    fn par_sin(&self) -> Self::Output;
    /// Parallel [`FixedMath::cos`].
    fn par_cos(&self) -> Self::Output;
    /// Parallel [`FixedMath::tan`].
    fn par_tan(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::asin`].
    fn par_asin(&self) -> Self::Output;
    /// Parallel [`FixedMath::acos`].
    fn par_acos(&self) -> Self::Output;
    /// Parallel [`FixedMath::atan`].
    fn par_atan(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::atan2`]; fails the same way on a length mismatch.
    fn par_atan2(&self, x: &Self) -> Result<Self::Output>;
    /// Parallel [`FixedMath::sqrt`].
    fn par_sqrt(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::cbrt`].
    fn par_cbrt(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::exp`].
    fn par_exp(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::ln`].
    fn par_ln(&self, frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::sinh`].
    fn par_sinh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::cosh`].
    fn par_cosh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
    /// Parallel [`FixedMath::tanh`].
    fn par_tanh(&self, y_frac: u8, x_frac: u8) -> Self::Output;
}
