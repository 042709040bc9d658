//! Matrices of exact rationals, stored as row vectors.
//!
//! Matrices validate their shape at construction and on every operation.
//! Multiplication delegates to the row vectors' element-wise product
//! followed by an explicit sum, and the determinant is a recursive
//! cofactor expansion carried out entirely in rational arithmetic.

use std::fmt;
use std::ops::Index;

use exacta_rational::Rational;
use num_traits::{One, Zero};

use crate::error::{LinalgError, LinalgResult};
use crate::vector::Vector;

/// A matrix of [`Rational`] entries with fixed row and column counts.
///
/// Rows are owned [`Vector`]s of equal length; both dimensions are at
/// least one and never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vector>,
    ncols: usize,
}

impl Matrix {
    /// Creates a matrix from rows of entries, promoting each row to a
    /// [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if there are no rows or a
    /// row is empty, and [`LinalgError::RaggedMatrix`] if the rows have
    /// unequal lengths.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> LinalgResult<Self> {
        let rows = rows
            .into_iter()
            .map(Vector::new)
            .collect::<LinalgResult<Vec<_>>>()?;
        Self::from_vectors(rows)
    }

    /// Creates a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if `rows` is empty and
    /// [`LinalgError::RaggedMatrix`] if the rows have unequal lengths.
    pub fn from_vectors(rows: Vec<Vector>) -> LinalgResult<Self> {
        let Some(first) = rows.first() else {
            return Err(LinalgError::InvalidDimension);
        };
        let ncols = first.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::RaggedMatrix {
                    row: index,
                    expected: ncols,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows, ncols })
    }

    /// 1×n matrix holding the given vector as its single row.
    pub(crate) fn from_single_row(row: Vector) -> Self {
        let ncols = row.len();
        Self {
            rows: vec![row],
            ncols,
        }
    }

    /// Creates a matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if either dimension is
    /// zero.
    pub fn zeros(nrows: usize, ncols: usize) -> LinalgResult<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::InvalidDimension);
        }
        let rows = (0..nrows)
            .map(|_| Vector::from_raw(vec![Rational::zero(); ncols]))
            .collect();
        Ok(Self { rows, ncols })
    }

    /// Creates the n×n identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`] if `n` is zero.
    pub fn identity(n: usize) -> LinalgResult<Self> {
        let mut m = Self::zeros(n, n)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                if i == j {
                    *entry = Rational::one();
                }
            }
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.ncols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.ncols
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_rows()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &Vector {
        &self.rows[index]
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> std::slice::Iter<'_, Vector> {
        self.rows.iter()
    }

    /// Returns the element-wise sum with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless both dimensions
    /// match exactly.
    pub fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.check_same_shape(other, "matrix addition")?;
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| {
                Vector::from_raw(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
            })
            .collect();
        Ok(Self {
            rows,
            ncols: self.ncols,
        })
    }

    /// Adds `other` into this matrix in place. Only the receiver is
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless both dimensions
    /// match exactly; the receiver is untouched on failure.
    pub fn accumulate(&mut self, other: &Self) -> LinalgResult<()> {
        self.check_same_shape(other, "matrix addition")?;
        for (row, other_row) in self.rows.iter_mut().zip(&other.rows) {
            for (entry, rhs) in row.iter_mut().zip(other_row.iter()) {
                let sum = &*entry + rhs;
                *entry = sum;
            }
        }
        Ok(())
    }

    /// Returns the transpose: entry (r, c) moves to (c, r).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let nrows = self.num_rows();
        let rows = (0..self.ncols)
            .map(|c| Vector::from_raw(self.rows.iter().map(|row| row[c].clone()).collect()))
            .collect();
        Self { rows, ncols: nrows }
    }

    /// Matrix-matrix multiply: C = A · B.
    ///
    /// Entry (i, j) is `row(i).dot(Bᵀ.row(j))` summed: the element-wise
    /// product of row i and column j followed by the explicit summation
    /// step.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless
    /// `self.num_cols() == other.num_rows()`.
    pub fn mm(&self, other: &Self) -> LinalgResult<Self> {
        if self.ncols != other.num_rows() {
            return Err(LinalgError::DimensionMismatch {
                operation: "matrix multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let other_t = other.transpose();
        let rows = self
            .rows
            .iter()
            .map(|row| -> LinalgResult<Vector> {
                let entries = other_t
                    .rows
                    .iter()
                    .map(|col| Ok(row.dot(col)?.sum()))
                    .collect::<LinalgResult<Vec<_>>>()?;
                Ok(Vector::from_raw(entries))
            })
            .collect::<LinalgResult<Vec<_>>>()?;
        Ok(Self {
            rows,
            ncols: other.ncols,
        })
    }

    /// Matrix-vector multiply: y = A · x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless
    /// `self.num_cols() == x.len()`.
    pub fn mv(&self, x: &Vector) -> LinalgResult<Vector> {
        if self.ncols != x.len() {
            return Err(LinalgError::DimensionMismatch {
                operation: "matrix-vector multiplication",
                left: self.shape(),
                right: x.len().to_string(),
            });
        }
        let entries = self
            .rows
            .iter()
            .map(|row| Ok(row.dot(x)?.sum()))
            .collect::<LinalgResult<Vec<_>>>()?;
        Ok(Vector::from_raw(entries))
    }

    /// Scales every entry by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &Rational) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.scale(scalar)).collect(),
            ncols: self.ncols,
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// All accumulation is exact rational arithmetic. The expansion costs
    /// O(n!), which is fine for the small transform-sized matrices this
    /// library targets; see [`Matrix::det_bounded`] for a guarded variant.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for non-square matrices.
    pub fn det(&self) -> LinalgResult<Rational> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows(),
                cols: self.ncols,
            });
        }
        Ok(self.cofactor_expansion())
    }

    /// Computes the determinant, refusing matrices larger than `limit`
    /// before doing any factorial-cost work.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::TooLarge`] if either dimension exceeds
    /// `limit`, and [`LinalgError::NotSquare`] for non-square matrices.
    pub fn det_bounded(&self, limit: usize) -> LinalgResult<Rational> {
        let dimension = self.num_rows().max(self.ncols);
        if dimension > limit {
            return Err(LinalgError::TooLarge { dimension, limit });
        }
        self.det()
    }

    fn cofactor_expansion(&self) -> Rational {
        if self.num_rows() == 1 {
            return self[(0, 0)].clone();
        }
        let mut det = Rational::zero();
        for col in 0..self.ncols {
            let entry = &self[(0, col)];
            if entry.is_zero() {
                continue;
            }
            let term = entry * &self.minor(col).cofactor_expansion();
            det = if col % 2 == 1 { det - term } else { det + term };
        }
        det
    }

    /// Submatrix with row 0 and the given column removed.
    fn minor(&self, col: usize) -> Self {
        let rows = self.rows[1..]
            .iter()
            .map(|row| {
                Vector::from_raw(
                    row.iter()
                        .enumerate()
                        .filter(|&(c, _)| c != col)
                        .map(|(_, entry)| entry.clone())
                        .collect(),
                )
            })
            .collect();
        Self {
            rows,
            ncols: self.ncols - 1,
        }
    }

    fn shape(&self) -> String {
        format!("{}x{}", self.num_rows(), self.ncols)
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> LinalgResult<()> {
        if self.num_rows() == other.num_rows() && self.ncols == other.ncols {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if the position is out of range; use [`Matrix::get`] for a
    /// checked lookup.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flat_map(Vector::iter)
            .map(|entry| entry.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.rows {
            let entries: Vec<String> = row
                .iter()
                .map(|entry| format!("{:>width$}", entry.to_string()))
                .collect();
            writeln!(f, "[{}]", entries.join(", "))?;
        }
        Ok(())
    }
}
