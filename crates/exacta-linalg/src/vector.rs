//! Fixed-length vectors of exact rationals.

use std::fmt;
use std::ops::Index;

use exacta_rational::Rational;
use num_traits::Zero;

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::Matrix;
use crate::rotation::{self, RotationAxis};

/// A fixed-length vector of [`Rational`] entries.
///
/// The length is set at construction (at least one entry) and never
/// changes; operations return new vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    elems: Vec<Rational>,
}

impl Vector {
    /// Creates a vector from its entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if `elems` is empty.
    pub fn new(elems: Vec<Rational>) -> LinalgResult<Self> {
        if elems.is_empty() {
            return Err(LinalgError::InvalidDimension);
        }
        Ok(Self { elems })
    }

    /// Creates a vector of integer-valued entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if `values` is empty.
    pub fn from_integers(values: &[i64]) -> LinalgResult<Self> {
        Self::new(values.iter().map(|&n| Rational::from_integer(n)).collect())
    }

    /// Internal constructor for entries known to be non-empty.
    pub(crate) fn from_raw(elems: Vec<Rational>) -> Self {
        debug_assert!(!elems.is_empty());
        Self { elems }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns true if the vector has no entries. Construction rejects
    /// empty vectors, so this is false for every reachable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns a reference to the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.elems.get(index)
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Rational> {
        self.elems.iter()
    }

    /// Iterates mutably over the entries. The length cannot change.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Rational> {
        self.elems.iter_mut()
    }

    /// Returns the vector of element-wise products with `other`.
    ///
    /// Note that this is NOT a scalar: summation of the products is the
    /// caller's explicit second step (see [`Vector::sum`]). Matrix
    /// multiplication relies on this two-step form.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless the lengths are
    /// equal.
    pub fn dot(&self, other: &Self) -> LinalgResult<Self> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                operation: "dot product",
                left: self.len().to_string(),
                right: other.len().to_string(),
            });
        }
        Ok(Self {
            elems: self.iter().zip(other.iter()).map(|(a, b)| a * b).collect(),
        })
    }

    /// Reduces the entries to a single rational by exact addition.
    #[must_use]
    pub fn sum(&self) -> Rational {
        self.iter().fold(Rational::zero(), |acc, x| acc + x)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// The sum of squares is accumulated exactly; only the final square
    /// root is floating point, so the result is as accurate as one `f64`
    /// operation allows.
    #[must_use]
    pub fn norm(&self) -> f64 {
        let squares = self.iter().fold(Rational::zero(), |acc, x| acc + &(x * x));
        squares.to_f64().sqrt()
    }

    /// Returns the vector scaled element-wise by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &Rational) -> Self {
        Self {
            elems: self.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Returns this vector rotated counterclockwise by `theta` radians.
    ///
    /// Valid for length 2 (axis [`RotationAxis::None`]) and length 3 (axis
    /// X, Y or Z). The angle is wrapped into `[0, 2π)` first, then the
    /// rotation matrix is built and applied as a matrix-by-vector product.
    /// The result is exact with respect to the `f64` trig values of the
    /// wrapped angle; see [`crate::rotation`] for the boundary discussion.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedDimension`] for other lengths or
    /// an axis that does not fit the dimension.
    pub fn rotate(&self, theta: f64, axis: RotationAxis) -> LinalgResult<Self> {
        let angle = rotation::normalize_angle(theta);
        let rotation = rotation::rotation_matrix(self.len(), angle, axis)?;
        rotation.mv(self)
    }

    /// Returns a 1×n matrix holding this vector as its single row.
    #[must_use]
    pub fn as_row_matrix(&self) -> Matrix {
        Matrix::from_single_row(self.clone())
    }

    /// Returns the cross product with `other`.
    ///
    /// Defined only for vectors of length 3; computed in exact rational
    /// arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedDimension`] unless both vectors
    /// have length 3.
    pub fn cross(&self, other: &Self) -> LinalgResult<Self> {
        if self.len() != 3 || other.len() != 3 {
            return Err(LinalgError::UnsupportedDimension(format!(
                "cross product requires vectors of length 3, found {} and {}",
                self.len(),
                other.len()
            )));
        }
        let a = &self.elems;
        let b = &other.elems;
        Ok(Self {
            elems: vec![
                &a[1] * &b[2] - &a[2] * &b[1],
                &a[2] * &b[0] - &a[0] * &b[2],
                &a[0] * &b[1] - &a[1] * &b[0],
            ],
        })
    }
}

impl Index<usize> for Vector {
    type Output = Rational;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elems[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Rational;
    type IntoIter = std::slice::Iter<'a, Rational>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", entries.join(", "))
    }
}
