//! Exact Linear Algebra Demonstration
//!
//! Run with: cargo run --example matrix_demo

use exacta::prelude::*;
use std::f64::consts::FRAC_PI_2;

// Helper to create integer-valued rationals
fn q(n: i64) -> Rational {
    Rational::from_integer(n)
}

fn main() -> LinalgResult<()> {
    println!("=== Exacta: exact rational linear algebra ===\n");

    rationals()?;
    vectors()?;
    matrices()?;
    rotations()?;

    Ok(())
}

fn rationals() -> LinalgResult<()> {
    println!("--- Rationals ---");

    let frac = q(1);
    println!("one as a fraction: {}/{}", frac.numerator(), frac.denominator());

    let sum = Rational::from_i64(1, 2)? + Rational::from_i64(1, 3)?;
    println!("1/2 + 1/3 = {sum}\n");
    Ok(())
}

fn vectors() -> LinalgResult<()> {
    println!("--- Vectors ---");

    let vec = Vector::from_integers(&[0, 1, 2, 3])?;
    println!("v        = {vec}");
    println!("5v       = {}", vec.scale(&q(5)));
    println!("|v|      = {:.6}\n", vec.norm());
    Ok(())
}

fn matrices() -> LinalgResult<()> {
    println!("--- Matrices ---");

    let mtx = Matrix::from_rows(vec![vec![q(0), q(11)], vec![q(2), q(3)]])?;
    println!("M =\n{mtx}");

    let product = mtx.scale(&q(2)).mm(&mtx)?;
    println!("2MM =\n{product}");

    // 44*62 - 66*12 = 1936
    println!("det(2MM) = {} (expected {})\n", product.det()?, 44 * 62 - 66 * 12);
    Ok(())
}

fn rotations() -> LinalgResult<()> {
    println!("--- Rotations ---");

    let v = Vector::from_integers(&[1, 0])?;
    let rotated = v.rotate(FRAC_PI_2, RotationAxis::None)?;
    println!(
        "(1, 0) rotated a quarter turn: ({:.6}, {:.6})",
        rotated[0].to_f64(),
        rotated[1].to_f64()
    );

    let z = Vector::from_integers(&[1, 0, 0])?
        .cross(&Vector::from_integers(&[0, 1, 0])?)?;
    println!("x cross y = {z}");
    Ok(())
}
