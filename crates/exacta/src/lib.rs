//! # Exacta
//!
//! Exact rational arithmetic and small-matrix linear algebra.
//!
//! Exacta keeps every algebraic operation in exact fraction arithmetic:
//! rationals are stored in lowest terms, vectors and matrices are
//! dimension-checked at every step, and the determinant is computed by
//! cofactor expansion with no floating point anywhere in the accumulation.
//!
//! ## Features
//!
//! - **Exact Rationals**: arbitrary precision fractions, always reduced
//! - **Dimension Checking**: incompatible shapes are reported, never padded
//! - **Exact Determinants**: recursive cofactor expansion over rationals
//! - **2D/3D Rotations**: canonical rotation matrices with a documented
//!   float-to-exact boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Rational::from_integer(0), Rational::from_integer(11)],
//!     vec![Rational::from_integer(2), Rational::from_integer(3)],
//! ])?;
//! assert_eq!(m.det()?, Rational::from_integer(-22));
//! # Ok::<(), exacta::linalg::LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_linalg as linalg;
pub use exacta_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_linalg::{
        normalize_angle, rotation_matrix, LinalgError, LinalgResult, Matrix, RotationAxis, Vector,
    };
    pub use exacta_rational::{Rational, RationalError};
}
