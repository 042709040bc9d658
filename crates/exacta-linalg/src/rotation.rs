//! Canonical 2D and 3D rotation matrices.
//!
//! The factory in this module is where exact algebra meets floating
//! trigonometry. Matrix entries are built from `f64` sine/cosine values
//! and converted losslessly into [`Rational`]s: every operation after
//! the conversion is exact with respect to those floats, but the floats
//! themselves approximate the real sine and cosine. Results of applying a
//! rotation should therefore be compared within floating tolerance, never
//! for exact equality (the sole exception is an angle whose trig values
//! are exact in `f64`, such as zero).
//!
//! Rotations are counterclockwise by `theta` radians: positive angles
//! take the x-axis toward the y-axis (2D), and likewise cycle the axes in
//! the right-handed sense about the chosen axis (3D).

use std::f64::consts::TAU;
use std::fmt;

use exacta_rational::Rational;
use num_traits::{One, Zero};

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::Matrix;

/// Selects which canonical rotation matrix to build.
///
/// A planar (2D) rotation has no axis to choose, so it uses
/// [`RotationAxis::None`]; rotations in 3-space pick one of X, Y, Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// The implicit axis of a planar rotation.
    None,
    /// The x-axis.
    X,
    /// The y-axis.
    Y,
    /// The z-axis.
    Z,
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationAxis::None => write!(f, "none"),
            RotationAxis::X => write!(f, "x"),
            RotationAxis::Y => write!(f, "y"),
            RotationAxis::Z => write!(f, "z"),
        }
    }
}

/// Wraps an angle into `[0, 2π)`.
///
/// Negative angles gain the smallest multiple of 2π that makes them
/// non-negative; angles of a full turn or more are reduced modulo 2π.
#[must_use]
pub fn normalize_angle(theta: f64) -> f64 {
    theta.rem_euclid(TAU)
}

/// Builds the canonical rotation matrix for the given dimension and axis.
///
/// Dimension 2 requires [`RotationAxis::None`]; dimension 3 requires X, Y
/// or Z. The angle is taken as-is (callers wanting the `[0, 2π)` canonical
/// form apply [`normalize_angle`] first, as [`Vector::rotate`] does).
///
/// # Errors
///
/// Returns [`LinalgError::UnsupportedDimension`] for dimensions other than
/// 2 and 3 or an axis that does not fit the dimension, and propagates
/// [`RationalError::NonFinite`] if `angle` is NaN or infinite.
///
/// [`Vector::rotate`]: crate::vector::Vector::rotate
/// [`RationalError::NonFinite`]: exacta_rational::RationalError::NonFinite
pub fn rotation_matrix(
    dimension: usize,
    angle: f64,
    axis: RotationAxis,
) -> LinalgResult<Matrix> {
    match (dimension, axis) {
        (2, RotationAxis::None) => planar(angle),
        (3, RotationAxis::X) => about_x(angle),
        (3, RotationAxis::Y) => about_y(angle),
        (3, RotationAxis::Z) => about_z(angle),
        (2 | 3, axis) => Err(LinalgError::UnsupportedDimension(format!(
            "axis {axis} does not select a rotation in dimension {dimension}"
        ))),
        _ => Err(LinalgError::UnsupportedDimension(format!(
            "no rotation matrix for dimension {dimension}, expected 2 or 3"
        ))),
    }
}

/// Exact rational images of the angle's sine and cosine.
fn trig(angle: f64) -> LinalgResult<(Rational, Rational)> {
    let (sin, cos) = angle.sin_cos();
    Ok((Rational::from_f64(sin)?, Rational::from_f64(cos)?))
}

fn planar(angle: f64) -> LinalgResult<Matrix> {
    let (s, c) = trig(angle)?;
    Matrix::from_rows(vec![vec![c.clone(), -&s], vec![s, c]])
}

fn about_x(angle: f64) -> LinalgResult<Matrix> {
    let (s, c) = trig(angle)?;
    Matrix::from_rows(vec![
        vec![Rational::one(), Rational::zero(), Rational::zero()],
        vec![Rational::zero(), c.clone(), -&s],
        vec![Rational::zero(), s, c],
    ])
}

fn about_y(angle: f64) -> LinalgResult<Matrix> {
    let (s, c) = trig(angle)?;
    Matrix::from_rows(vec![
        vec![c.clone(), Rational::zero(), s.clone()],
        vec![Rational::zero(), Rational::one(), Rational::zero()],
        vec![-&s, Rational::zero(), c],
    ])
}

fn about_z(angle: f64) -> LinalgResult<Matrix> {
    let (s, c) = trig(angle)?;
    Matrix::from_rows(vec![
        vec![c.clone(), -&s, Rational::zero()],
        vec![s, c, Rational::zero()],
        vec![Rational::zero(), Rational::zero(), Rational::one()],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(matrix: &Matrix, expected: &[&[f64]]) {
        for (r, row) in expected.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert!(
                    (matrix[(r, c)].to_f64() - value).abs() < 1e-12,
                    "entry ({r}, {c}): {} vs {value}",
                    matrix[(r, c)].to_f64()
                );
            }
        }
    }

    #[test]
    fn test_zero_angle_is_exact_identity() {
        // cos 0 and sin 0 are exact in f64, so the conversion is exact too.
        assert_eq!(
            rotation_matrix(3, 0.0, RotationAxis::Z).unwrap(),
            Matrix::identity(3).unwrap()
        );
        assert_eq!(
            rotation_matrix(2, 0.0, RotationAxis::None).unwrap(),
            Matrix::identity(2).unwrap()
        );
    }

    #[test]
    fn test_planar_quarter_turn() {
        let m = rotation_matrix(2, FRAC_PI_2, RotationAxis::None).unwrap();
        assert_close(&m, &[&[0.0, -1.0], &[1.0, 0.0]]);
    }

    #[test]
    fn test_half_turn() {
        let m = rotation_matrix(2, PI, RotationAxis::None).unwrap();
        assert_close(&m, &[&[-1.0, 0.0], &[0.0, -1.0]]);
    }

    #[test]
    fn test_axis_layouts() {
        let x = rotation_matrix(3, FRAC_PI_2, RotationAxis::X).unwrap();
        assert_close(&x, &[&[1.0, 0.0, 0.0], &[0.0, 0.0, -1.0], &[0.0, 1.0, 0.0]]);

        let y = rotation_matrix(3, FRAC_PI_2, RotationAxis::Y).unwrap();
        assert_close(&y, &[&[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0], &[-1.0, 0.0, 0.0]]);

        let z = rotation_matrix(3, FRAC_PI_2, RotationAxis::Z).unwrap();
        assert_close(&z, &[&[0.0, -1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        let m = rotation_matrix(3, 0.7, RotationAxis::Y).unwrap();
        let product = m.mm(&m.transpose()).unwrap();
        let identity = Matrix::identity(3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let diff = product[(r, c)].to_f64() - identity[(r, c)].to_f64();
                assert!(diff.abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_rotation_determinant_is_one() {
        let m = rotation_matrix(3, 1.234, RotationAxis::X).unwrap();
        assert!((m.det().unwrap().to_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_must_fit_dimension() {
        assert!(matches!(
            rotation_matrix(2, 1.0, RotationAxis::X),
            Err(LinalgError::UnsupportedDimension(_))
        ));
        assert!(matches!(
            rotation_matrix(3, 1.0, RotationAxis::None),
            Err(LinalgError::UnsupportedDimension(_))
        ));
    }

    #[test]
    fn test_unsupported_dimensions() {
        for dimension in [0, 1, 4, 7] {
            assert!(matches!(
                rotation_matrix(dimension, 1.0, RotationAxis::None),
                Err(LinalgError::UnsupportedDimension(_))
            ));
        }
    }

    #[test]
    fn test_nan_angle_reported() {
        assert!(matches!(
            rotation_matrix(2, f64::NAN, RotationAxis::None),
            Err(LinalgError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.0)).abs() < 1e-15);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
        assert!(normalize_angle(-0.25) >= 0.0);
        assert!(normalize_angle(123.456) < TAU);
    }
}
