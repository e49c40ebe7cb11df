//! Transcendental functions on 16-bit fixed-point values.
//!
//! Every routine runs a fixed number of iterations regardless of its input
//! (the only exception is the exact-zero exit in [`cordic::atan2`]), so
//! worst-case timing equals typical timing.

pub mod cordic;
pub mod explog;
pub mod hyperbolic;
pub mod roots;

pub use cordic::{acos, asin, atan, atan2, cos, sin, sin_cos, tan};
pub use explog::{exp, ln, log10, log2, pow};
pub use hyperbolic::{cosh, sinh, tanh};
pub use roots::{cbrt, sqrt};
