//! # fixmath16
//!
//! 16-bit signed fixed-point (Qm.n) math for targets without a floating
//! point unit.
//!
//! A value is a plain `i16` whose meaning depends on a fractional-bit count
//! `frac` in `0..=15` passed alongside it: the stored integer `v` stands for
//! `v * 2^-frac`. Nothing in this crate encodes the format in a type; every
//! operation takes the format(s) it needs as arguments.
//!
//! ## Behavior on overflow
//!
//! Results that do not fit saturate to `i16::MIN` / `i16::MAX`. Only genuine
//! domain or pole conditions (`sqrt` of a negative, `ln(0)`, `tan(±π/2)`,
//! ...) are reported, as a [`FixedError`] that also carries the fallback value
//! an embedded caller would use.
//!
//! ## Deterministic timing
//!
//! Every function runs a fixed number of iterations: see the
//! `*_ITERATIONS` constants below.
//!
//! ## Quick start
//!
//! ```rust
//! use fixmath16::{convert::{from_float, to_float}, sin_cos, sqrt, cordic::ANGLE_HALF_PI};
//!
//! const Q12: u8 = 12;
//!
//! let two = from_float(2.0, Q12);
//! let root = sqrt(two, Q12).unwrap();
//! assert!((to_float(root, Q12) - std::f32::consts::SQRT_2).abs() < 1e-3);
//!
//! // angles are fractions of π in Q1.15
//! let (s, _c) = sin_cos(ANGLE_HALF_PI);
//! assert!(s > 32700);
//! ```

pub mod arith;
pub mod convert;
pub mod error;
pub mod math;
pub mod qformat;
pub mod slice;
pub mod traits;
pub mod utils;

pub use error::{Fallback, FixedError, Result};
pub use math::{
    acos, asin, atan, atan2, cbrt, cordic, cos, cosh, exp, explog, hyperbolic, ln, log10, log2,
    pow, roots, sin, sin_cos, sinh, sqrt, tan, tanh,
};
pub use qformat::{MathConstant, QFormat};
pub use traits::FixedMath;
#[cfg(feature = "parallel")]
pub use traits::ParFixedMath;

/// Micro-rotations per circular CORDIC evaluation (sin, cos, atan2, ...).
pub const CORDIC_ITERATIONS: usize = 14;
/// Distinct shifts per hyperbolic CORDIC evaluation; shifts 4 and 13 run twice.
pub const HYPERBOLIC_ITERATIONS: usize = 16;
/// Horner passes of the exponential series.
pub const EXP_ITERATIONS: usize = 13;
/// Halley steps per logarithm.
pub const LOG_ITERATIONS: usize = 4;
/// Newton steps per cube root.
pub const CBRT_ITERATIONS: usize = 17;

/// Slices up to this length are evaluated on the calling thread even by the
/// `par_*` methods.
pub const PARALLEL_THRESHOLD: usize = 8_192;
/// Elements per rayon task in the `par_*` methods.
pub const PARALLEL_CHUNK_SIZE: usize = 2_048;
