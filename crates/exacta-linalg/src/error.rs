//! Error types for vector and matrix operations.

use exacta_rational::RationalError;
use thiserror::Error;

/// Convenience alias for fallible linear algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors from vector and matrix construction and arithmetic.
///
/// These are programmer-input errors: they are reported to the immediate
/// caller and never recovered from or retried internally.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LinalgError {
    /// Operand shapes incompatible for the requested operation.
    #[error("dimension mismatch in {operation}: {left} vs {right}")]
    DimensionMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// Shape of the left operand (`len` or `rows x cols`).
        left: String,
        /// Shape of the right operand.
        right: String,
    },

    /// Rows of unequal length at matrix construction.
    #[error("ragged matrix: row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Determinant requested on a non-square matrix.
    #[error("matrix is {rows}x{cols}, not square")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Rotation or cross product on a vector of unsupported length, or an
    /// axis that does not fit the dimension.
    #[error("unsupported dimension: {0}")]
    UnsupportedDimension(String),

    /// Zero-length vector or zero-dimension matrix at construction.
    #[error("invalid dimension: vectors and matrices must have at least one entry")]
    InvalidDimension,

    /// Matrix dimension exceeds a caller-provided bound.
    #[error("matrix dimension {dimension} exceeds the limit {limit}")]
    TooLarge {
        /// The matrix dimension.
        dimension: usize,
        /// The configured bound.
        limit: usize,
    },

    /// A rational arithmetic failure inside a linear algebra operation.
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = LinalgError::RaggedMatrix {
            row: 1,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().contains("row 1"));

        let err = LinalgError::NotSquare { rows: 2, cols: 3 };
        assert!(err.to_string().contains("2x3"));
    }

    #[test]
    fn test_rational_errors_convert() {
        let err: LinalgError = RationalError::DivisionByZero.into();
        assert_eq!(err.to_string(), "division by zero");
    }
}
