//! Error types for matrix operations.

use std::fmt;

use thiserror::Error;

/// Logical shape of a matrix, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Errors reported by matrix operations.
///
/// None of these are fatal: the receiver of a failed operation is left
/// untouched and the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Element-wise operands (or an apply companion) differ in shape.
    #[error("{op}: shape mismatch, {left} vs {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    /// Columns of A differ from rows of B in a matrix product.
    #[error("inner dimension mismatch: A is {left}, B is {right}")]
    InnerDimension { left: Shape, right: Shape },

    /// Element counts disagree (strict reshape, set or paired updates).
    #[error("element count mismatch: expected {expected}, found {found}")]
    ElementCount { expected: usize, found: usize },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

pub(crate) fn shape_mismatch(op: &'static str, left: Shape, right: Shape) -> MatrixError {
    tracing::debug!(op, %left, %right, "shape mismatch");
    MatrixError::ShapeMismatch { op, left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::new(2, 3).to_string(), "2x3");
        assert_eq!(Shape::from((4, 1)), Shape::new(4, 1));
    }

    #[test]
    fn test_error_messages() {
        let err = MatrixError::ShapeMismatch {
            op: "plus",
            left: Shape::new(2, 3),
            right: Shape::new(3, 2),
        };
        assert_eq!(err.to_string(), "plus: shape mismatch, 2x3 vs 3x2");

        let err = MatrixError::InnerDimension {
            left: Shape::new(2, 3),
            right: Shape::new(2, 3),
        };
        assert!(err.to_string().contains("A is 2x3"));

        let err = MatrixError::ElementCount {
            expected: 6,
            found: 4,
        };
        assert_eq!(err.to_string(), "element count mismatch: expected 6, found 4");
    }
}
