//! Prints reference tables of every function across Q-formats.
//!
//! Each row shows the real input, the fixed-point result converted back to
//! floating point, the `f64` reference and the error in LSBs. Useful for
//! eyeballing which format is precise enough for a given range.
//!
//! Usage: `cargo run --example function_tables [frac]`

use fixmath16::convert::{from_float, to_float};
use fixmath16::cordic::ANGLE_HALF_PI;
use fixmath16::{
    asin, atan, cbrt, cos, cosh, exp, ln, log10, log2, sin, sinh, sqrt, tan, tanh, Fallback,
    QFormat,
};

fn print_header(title: &str) {
    println!("\n{title}");
    println!("{:>10} {:>12} {:>12} {:>8}", "x", "fixed", "f64", "LSB");
}

fn print_row(x: f64, fixed: f64, reference: f64, lsb: f64) {
    println!(
        "{x:>10.4} {fixed:>12.6} {reference:>12.6} {:>8.2}",
        (fixed - reference) / lsb
    );
}

fn angle_table() {
    let lsb = 1.0 / 32768.0;
    print_header("sin / cos / asin over normalized angles (Q1.15)");

    for step in -8..=8 {
        let angle = (step * ANGLE_HALF_PI as i32 / 4).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        let radians = angle as f64 / 32768.0 * std::f64::consts::PI;

        print_row(radians, sin(angle) as f64 * lsb, radians.sin(), lsb);
        print_row(radians, cos(angle) as f64 * lsb, radians.cos(), lsb);
    }

    for step in -4..=4 {
        let x = step as f64 / 4.0;
        let fixed = from_float(x as f32, 15);
        let reference = x.clamp(-1.0, 1.0 - lsb).asin() / std::f64::consts::PI;
        print_row(x, asin(fixed) as f64 * lsb, reference, lsb);
    }
}

fn format_table(format: QFormat) {
    let frac = format.frac();
    let lsb = format.precision() as f64;
    let value = |v: i16| to_float(v, frac) as f64;
    let max = format.max() as f64;

    println!("\n==== {format} (step {lsb:e}, range [{}, {max}]) ====", format.min());

    let samples: Vec<f64> = (1..=8).map(|i| max * i as f64 / 9.0).collect();

    print_header("sqrt / cbrt");
    for &x in &samples {
        let fixed = from_float(x as f32, frac);
        print_row(value(fixed), value(sqrt(fixed, frac).or_fallback()), value(fixed).sqrt(), lsb);
        print_row(value(fixed), value(cbrt(fixed, frac)), value(fixed).cbrt(), lsb);
    }

    print_header("exp / ln / log2 / log10");
    for &x in &samples {
        let fixed = from_float(x as f32, frac);
        let small = from_float((x / max * 2.0) as f32, frac);
        print_row(value(small), value(exp(small, frac).or_fallback()), value(small).exp(), lsb);
        print_row(value(fixed), value(ln(fixed, frac).or_fallback()), value(fixed).ln(), lsb);
        print_row(value(fixed), value(log2(fixed, frac).or_fallback()), value(fixed).log2(), lsb);
        print_row(value(fixed), value(log10(fixed, frac).or_fallback()), value(fixed).log10(), lsb);
    }

    print_header("tan (normalized angle in, this format out) / atan (this format in, radians out)");
    for step in 1..=7 {
        let angle = (step * ANGLE_HALF_PI as i32 / 8) as i16;
        let radians = angle as f64 / 32768.0 * std::f64::consts::PI;
        print_row(radians, value(tan(angle, frac).or_fallback()), radians.tan(), lsb);
    }
    for &x in &samples {
        let fixed = from_float(x as f32, frac);
        let radians = atan(fixed, frac) as f64 / 32768.0 * std::f64::consts::PI;
        print_row(value(fixed), radians, value(fixed).atan(), std::f64::consts::PI / 32768.0);
    }

    print_header("sinh / cosh / tanh");
    for &x in &samples {
        let fixed = from_float((x / max * 2.0) as f32, frac);
        let v = value(fixed);
        print_row(v, value(sinh(frac, fixed, frac)), v.sinh(), lsb);
        print_row(v, value(cosh(frac, fixed, frac)), v.cosh(), lsb);
        print_row(v, tanh(15, fixed, frac) as f64 / 32768.0, v.tanh(), 1.0 / 32768.0);
    }
}

fn main() {
    env_logger::init();

    let requested = std::env::args().nth(1).map(|arg| arg.parse::<u8>());

    angle_table();

    match requested {
        Some(Ok(frac)) => match QFormat::new(frac) {
            Ok(format) => format_table(format),
            Err(e) => eprintln!("{e}"),
        },
        Some(Err(e)) => eprintln!("invalid fractional bit count: {e}"),
        None => QFormat::ALL.into_iter().for_each(format_table),
    }
}
