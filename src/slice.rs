//! [`FixedMath`] and [`ParFixedMath`] for `[i16]`.
//!
//! The parallel path splits the output into [`PARALLEL_CHUNK_SIZE`] chunks
//! and fills each one on the rayon pool. Every element is independent and
//! the scalar routines touch no shared state, so chunks need no
//! coordination.

use crate::error::{validation_error, Fallback, Result};
use crate::math::{cordic, explog, hyperbolic, roots};
use crate::traits::FixedMath;

#[cfg(feature = "parallel")]
use crate::traits::ParFixedMath;
#[cfg(feature = "parallel")]
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline(always)]
fn map_elements<F>(a: &[i16], f: F) -> Vec<i16>
where
    F: Fn(i16) -> i16,
{
    a.iter().map(|&v| f(v)).collect()
}

#[inline(always)]
fn check_lengths(a: &[i16], b: &[i16]) -> Result<()> {
    if a.len() != b.len() {
        return Err(validation_error(format!(
            "input slices must have same length ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn par_map_elements<F>(a: &[i16], f: F) -> Vec<i16>
where
    F: Fn(i16) -> i16 + Sync + Send,
{
    // short inputs stay on the calling thread
    if a.len() <= PARALLEL_THRESHOLD {
        return map_elements(a, f);
    }

    let mut out = vec![0i16; a.len()];
    out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(out_chunk, in_chunk)| {
            for (dst, &src) in out_chunk.iter_mut().zip(in_chunk) {
                *dst = f(src);
            }
        });
    out
}

#[cfg(feature = "parallel")]
fn par_zip_elements<F>(a: &[i16], b: &[i16], f: F) -> Vec<i16>
where
    F: Fn(i16, i16) -> i16 + Sync + Send,
{
    if a.len() <= PARALLEL_THRESHOLD {
        return a.iter().zip(b).map(|(&y, &x)| f(y, x)).collect();
    }

    let mut out = vec![0i16; a.len()];
    out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .zip(b.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((out_chunk, a_chunk), b_chunk)| {
            for ((dst, &y), &x) in out_chunk.iter_mut().zip(a_chunk).zip(b_chunk) {
                *dst = f(y, x);
            }
        });
    out
}

impl FixedMath for [i16] {
    type Output = Vec<i16>;

    fn sin(&self) -> Self::Output {
        map_elements(self, cordic::sin)
    }

    fn cos(&self) -> Self::Output {
        map_elements(self, cordic::cos)
    }

    fn tan(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| cordic::tan(v, frac).or_fallback())
    }

    fn asin(&self) -> Self::Output {
        map_elements(self, cordic::asin)
    }

    fn acos(&self) -> Self::Output {
        map_elements(self, cordic::acos)
    }

    fn atan(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| cordic::atan(v, frac))
    }

    fn atan2(&self, x: &Self) -> Result<Self::Output> {
        check_lengths(self, x)?;
        Ok(self
            .iter()
            .zip(x)
            .map(|(&y, &x)| cordic::atan2(y, x))
            .collect())
    }

    fn sqrt(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| roots::sqrt(v, frac).or_fallback())
    }

    fn cbrt(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| roots::cbrt(v, frac))
    }

    fn exp(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| explog::exp(v, frac).or_fallback())
    }

    fn ln(&self, frac: u8) -> Self::Output {
        map_elements(self, |v| explog::ln(v, frac).or_fallback())
    }

    fn sinh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        map_elements(self, |v| hyperbolic::sinh(y_frac, v, x_frac))
    }

    fn cosh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        map_elements(self, |v| hyperbolic::cosh(y_frac, v, x_frac))
    }

    fn tanh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        map_elements(self, |v| hyperbolic::tanh(y_frac, v, x_frac))
    }
}

#[cfg(feature = "parallel")]
impl ParFixedMath for [i16] {
    type Output = Vec<i16>;

    fn par_sin(&self) -> Self::Output {
        par_map_elements(self, cordic::sin)
    }

    fn par_cos(&self) -> Self::Output {
        par_map_elements(self, cordic::cos)
    }

    fn par_tan(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| cordic::tan(v, frac).or_fallback())
    }

    fn par_asin(&self) -> Self::Output {
        par_map_elements(self, cordic::asin)
    }

    fn par_acos(&self) -> Self::Output {
        par_map_elements(self, cordic::acos)
    }

    fn par_atan(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| cordic::atan(v, frac))
    }

    fn par_atan2(&self, x: &Self) -> Result<Self::Output> {
        check_lengths(self, x)?;
        Ok(par_zip_elements(self, x, cordic::atan2))
    }

    fn par_sqrt(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| roots::sqrt(v, frac).or_fallback())
    }

    fn par_cbrt(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| roots::cbrt(v, frac))
    }

    fn par_exp(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| explog::exp(v, frac).or_fallback())
    }

    fn par_ln(&self, frac: u8) -> Self::Output {
        par_map_elements(self, |v| explog::ln(v, frac).or_fallback())
    }

    fn par_sinh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        par_map_elements(self, |v| hyperbolic::sinh(y_frac, v, x_frac))
    }

    fn par_cosh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        par_map_elements(self, |v| hyperbolic::cosh(y_frac, v, x_frac))
    }

    fn par_tanh(&self, y_frac: u8, x_frac: u8) -> Self::Output {
        par_map_elements(self, |v| hyperbolic::tanh(y_frac, v, x_frac))
    }
}
