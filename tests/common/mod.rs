//! Shared helpers for the accuracy tests.
#![allow(dead_code)]

use statrs::statistics::Statistics;

/// Summary of absolute errors against a floating-point reference.
#[derive(Debug, Clone, Copy)]
pub struct ErrorStats {
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl ErrorStats {
    pub fn from_errors(errors: &[f64]) -> Self {
        ErrorStats {
            max: Statistics::max(errors),
            mean: Statistics::mean(errors),
            std_dev: Statistics::std_dev(errors),
            count: errors.len(),
        }
    }

    pub fn report(&self, label: &str) {
        println!(
            "{label}: n={}, max abs error={:.3e}, mean={:.3e}, std dev={:.3e}",
            self.count, self.max, self.mean, self.std_dev
        );
    }
}

/// Real value of a fixed-point number.
pub fn real(value: i16, frac: u8) -> f64 {
    value as f64 / (1u32 << frac) as f64
}

/// Value of one LSB in a format.
pub fn lsb(frac: u8) -> f64 {
    1.0 / (1u32 << frac) as f64
}

/// Radians of a π-normalized Q1.15 angle.
pub fn radians(angle: i16) -> f64 {
    angle as f64 / 32768.0 * std::f64::consts::PI
}

/// π-normalized value (fraction of π) of a Q1.15 angle.
pub fn turns_of_pi(angle: i16) -> f64 {
    angle as f64 / 32768.0
}

/// Largest real value representable in a format.
pub fn format_max(frac: u8) -> f64 {
    real(i16::MAX, frac)
}
