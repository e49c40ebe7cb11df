//! Accuracy and quadrant tests for `atan2`.

mod common;

use common::turns_of_pi;
use fixmath16::cordic::{ANGLE_HALF_PI, ANGLE_PI};
use fixmath16::{atan2, FixedMath};

const ATAN2_MAX_ERR: f64 = 4e-4;

fn reference(y: i16, x: i16) -> f64 {
    (y as f64).atan2(x as f64) / std::f64::consts::PI
}

#[test]
fn test_atan2_precision_comparison() {
    let test_cases = [
        (1000i16, 1000i16),
        (1000, -1000),
        (-1000, -1000),
        (-1000, 1000),
        (3000, 4000),
        (-4000, 3000),
        (20000, -7000),
        (-32768, 32767),
        (12345, -30000),
    ];

    for &(y, x) in &test_cases {
        let expected = reference(y, x);
        let actual = turns_of_pi(atan2(y, x));
        let absolute_error = (actual - expected).abs();

        println!(
            "  Point: ({x}, {y}), Expected: {expected:.6}π, CORDIC: {actual:.6}π, Abs Error: {absolute_error:.2e}"
        );

        assert!(
            absolute_error <= 1e-3,
            "atan2({y}, {x}) error {absolute_error:.2e}"
        );
    }
}

#[test]
fn test_atan2_quadrant_rules() {
    assert_eq!(atan2(0, 5), 0);
    assert_eq!(atan2(0, -5), ANGLE_PI);
    assert_eq!(atan2(5, 0), ANGLE_HALF_PI);
    assert_eq!(atan2(-5, 0), -ANGLE_HALF_PI);
    assert_eq!(atan2(0, 0), 0);
    assert_eq!(atan2(-1, -1), ANGLE_HALF_PI / 2 - ANGLE_PI);
}

#[test]
fn test_atan2_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(12345);
    let mut ys = Vec::new();
    let mut xs = Vec::new();

    while ys.len() < 2000 {
        let y: i16 = rng.random_range(i16::MIN..=i16::MAX);
        let x: i16 = rng.random_range(i16::MIN..=i16::MAX);
        // short vectors lose angular resolution to integer steps
        if (y as i32).abs().max((x as i32).abs()) >= 4096 {
            ys.push(y);
            xs.push(x);
        }
    }

    let results = ys.atan2(&xs).unwrap();

    let mut max_abs_error = 0.0f64;
    let mut large_errors = Vec::new();
    for ((&y, &x), &angle) in ys.iter().zip(&xs).zip(&results) {
        let expected = reference(y, x);
        let error = (turns_of_pi(angle) - expected).abs();
        max_abs_error = max_abs_error.max(error);
        if error > 2e-4 {
            large_errors.push((y, x, error));
        }
    }

    println!("Random inputs max abs error: {max_abs_error:.2e}");
    for (y, x, error) in large_errors.iter().take(10) {
        println!("  Large error at ({x}, {y}): {error:.2e}");
    }

    assert!(max_abs_error <= ATAN2_MAX_ERR);
}

#[test]
fn test_atan2_length_mismatch() {
    let y = vec![1i16; 4];
    let x = vec![1i16; 3];
    assert!(y.atan2(&x).is_err());
}
