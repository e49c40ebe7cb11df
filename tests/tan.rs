//! Accuracy and pole tests for the tangent.

mod common;

use common::{radians, real};
use fixmath16::cordic::ANGLE_HALF_PI;
use fixmath16::{tan, Fallback, FixedError};

const Q12: u8 = 12;

#[test]
fn test_tan_precision_comparison() {
    let fractions = [0.05f64, 0.1, 1.0 / 6.0, 0.25, 1.0 / 3.0, 0.4, -0.1, -0.25, -0.4];

    for &fraction in &fractions {
        let angle = (fraction * 32768.0).round() as i16;
        let expected = radians(angle).tan();
        let actual = real(tan(angle, Q12).unwrap(), Q12);
        let relative_error = ((actual - expected) / expected).abs();

        println!(
            "  Angle: {fraction:.4}π, Expected: {expected:.6}, CORDIC: {actual:.6}, Rel Error: {relative_error:.2e}"
        );

        assert!(
            relative_error < 2e-3,
            "tan error too large at {fraction}π: expected={expected}, got={actual}"
        );
    }
}

/// Angles where the result fits Q3.12 comfortably.
#[test]
fn test_tan_precision_sweep() {
    let mut max_relative_error = 0.0f64;

    for angle in (-14000i16..=14000).step_by(37) {
        let expected = radians(angle).tan();
        let actual = real(tan(angle, Q12).unwrap(), Q12);
        let error = (actual - expected).abs() / expected.abs().max(0.25);
        max_relative_error = max_relative_error.max(error);
    }

    println!("tan sweep max relative error: {max_relative_error:.2e}");
    assert!(max_relative_error < 2e-3);
}

#[test]
fn test_tan_known_values() {
    assert_eq!(tan(ANGLE_HALF_PI / 2, Q12), Ok(4096));
    assert!(tan(0, Q12).unwrap().abs() <= 2);
}

#[test]
fn test_tan_poles() {
    let positive = tan(ANGLE_HALF_PI, Q12).unwrap_err();
    assert!(matches!(positive, FixedError::DomainError { .. }));
    assert_eq!(positive.fallback(), i16::MAX);

    let negative = tan(-ANGLE_HALF_PI, Q12);
    assert!(negative.is_err());
    assert_eq!(negative.or_fallback(), -i16::MAX);
}

#[test]
fn test_tan_saturates_near_pole() {
    // tan(0.49π) ≈ 31.8 does not fit Q3.12
    let angle = (0.49f64 * 32768.0) as i16;
    assert_eq!(tan(angle, Q12), Ok(i16::MAX));
    assert_eq!(tan(-angle, Q12), Ok(i16::MIN));
}
