//! Q-format descriptors and per-format math constants.
//!
//! A [`QFormat`] names one of the sixteen supported layouts of a 16-bit
//! signed fixed-point value. The stored integer `v` represents `v * 2^-frac`,
//! so a format with `frac` fractional bits covers
//! `[-2^(15-frac), 2^(15-frac) - 2^-frac]` in steps of `2^-frac`.
//!
//! Constants are rounded to the nearest representable step. Constants whose
//! magnitude does not fit the 16-bit range (π in Q14, e in Q15, ...) are
//! still available as wide `i32` values for use in intermediate arithmetic.

use crate::error::{format_error, Result};
use crate::utils::{saturate, MAX_FRAC};

/// Mathematical constants available in every Q-format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathConstant {
    /// Euler's number e.
    E,
    /// log2(e).
    Log2E,
    /// log10(e).
    Log10E,
    /// ln(2).
    Ln2,
    /// ln(10).
    Ln10,
    /// π.
    Pi,
    /// π/2.
    FracPi2,
    /// π/4.
    FracPi4,
    /// 1/π.
    Frac1Pi,
    /// 2/π.
    Frac2Pi,
    /// 2/sqrt(π).
    Frac2SqrtPi,
    /// sqrt(2).
    Sqrt2,
    /// 1/sqrt(2).
    Frac1Sqrt2,
}

impl MathConstant {
    /// Every constant, in declaration order.
    pub const ALL: [MathConstant; 13] = [
        MathConstant::E,
        MathConstant::Log2E,
        MathConstant::Log10E,
        MathConstant::Ln2,
        MathConstant::Ln10,
        MathConstant::Pi,
        MathConstant::FracPi2,
        MathConstant::FracPi4,
        MathConstant::Frac1Pi,
        MathConstant::Frac2Pi,
        MathConstant::Frac2SqrtPi,
        MathConstant::Sqrt2,
        MathConstant::Frac1Sqrt2,
    ];

    /// The constant as an `f64`.
    pub fn value(self) -> f64 {
        use std::f64::consts;

        match self {
            MathConstant::E => consts::E,
            MathConstant::Log2E => consts::LOG2_E,
            MathConstant::Log10E => consts::LOG10_E,
            MathConstant::Ln2 => consts::LN_2,
            MathConstant::Ln10 => consts::LN_10,
            MathConstant::Pi => consts::PI,
            MathConstant::FracPi2 => consts::FRAC_PI_2,
            MathConstant::FracPi4 => consts::FRAC_PI_4,
            MathConstant::Frac1Pi => consts::FRAC_1_PI,
            MathConstant::Frac2Pi => consts::FRAC_2_PI,
            MathConstant::Frac2SqrtPi => consts::FRAC_2_SQRT_PI,
            MathConstant::Sqrt2 => consts::SQRT_2,
            MathConstant::Frac1Sqrt2 => consts::FRAC_1_SQRT_2,
        }
    }
}

/// A 16-bit signed fixed-point layout with `frac` fractional bits.
///
/// # Examples
///
/// ```rust
/// use fixmath16::qformat::{MathConstant, QFormat};
///
/// let q12 = QFormat::new(12).unwrap();
/// assert_eq!(q12.raw_max(), i16::MAX);
/// assert_eq!(q12.max(), 8.0 - 1.0 / 4096.0);
/// assert_eq!(q12.constant(MathConstant::Pi), 12868);
///
/// assert!(QFormat::new(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QFormat {
    frac: u8,
}

impl QFormat {
    /// All supported formats, Q0 through Q15.
    pub const ALL: [QFormat; 16] = {
        let mut all = [QFormat { frac: 0 }; 16];
        let mut i = 0;
        while i < 16 {
            all[i] = QFormat { frac: i as u8 };
            i += 1;
        }
        all
    };

    /// Validates `frac` and returns the matching format.
    pub fn new(frac: u8) -> Result<Self> {
        if frac > MAX_FRAC {
            return Err(format_error(
                frac,
                format!("fractional bits must be at most {MAX_FRAC}"),
            ));
        }
        Ok(QFormat { frac })
    }

    /// Number of fractional bits.
    pub const fn frac(self) -> u8 {
        self.frac
    }

    /// Number of integer bits, excluding the sign bit.
    pub const fn int_bits(self) -> u8 {
        MAX_FRAC - self.frac
    }

    /// Value of one least significant bit, `2^-frac`.
    pub fn precision(self) -> f32 {
        1.0 / (1u32 << self.frac) as f32
    }

    /// Smallest stored integer.
    pub const fn raw_min(self) -> i16 {
        i16::MIN
    }

    /// Largest stored integer.
    pub const fn raw_max(self) -> i16 {
        i16::MAX
    }

    /// Smallest representable real value.
    pub fn min(self) -> f32 {
        self.raw_min() as f32 * self.precision()
    }

    /// Largest representable real value.
    pub fn max(self) -> f32 {
        self.raw_max() as f32 * self.precision()
    }

    /// 1.0 in this format, saturated (Q15 has no exact 1.0).
    pub fn one(self) -> i16 {
        saturate(1i32 << self.frac)
    }

    /// `constant` rounded to this format, as a wide value.
    pub fn constant(self, constant: MathConstant) -> i32 {
        (constant.value() * (1u32 << self.frac) as f64).round() as i32
    }

    /// `constant` rounded to this format and saturated to 16 bits.
    pub fn constant_saturated(self, constant: MathConstant) -> i16 {
        saturate(self.constant(constant))
    }

    /// Whether `constant` is representable in 16 bits in this format.
    pub fn fits(self, constant: MathConstant) -> bool {
        i16::try_from(self.constant(constant)).is_ok()
    }
}

impl std::fmt::Display for QFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}.{}", self.int_bits(), self.frac)
    }
}
